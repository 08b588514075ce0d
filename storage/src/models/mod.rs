//! Row models for the `discord_messages` table and its aggregates.

mod aggregates;
mod allow_list;
mod message_record;

pub use aggregates::{UserMonthRow, UserTotalRow};
pub use allow_list::AllowList;
pub use message_record::{MessageRecord, NewMessage};
