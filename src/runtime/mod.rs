//! Asynchronous side of the page: commands out, continuations back in.

mod command;
mod driver;
mod executor;

pub use command::{
    CommandReceiver, CommandSender, EventReceiver, EventSender, PageCommand, PageEvent,
};
pub use driver::PageDriver;
pub use executor::PageRuntime;
