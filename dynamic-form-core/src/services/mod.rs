//! 业务逻辑服务层

mod draft_state;
mod option_resolver;
mod submission;

pub use draft_state::{CommittedState, DraftState};
pub use option_resolver::{
    decode_options, HttpOptionsFetcher, OptionResolver, OptionsCache, OptionsFetcher,
};
pub use submission::{CloseCallback, SubmissionController, SubmitCallback};
