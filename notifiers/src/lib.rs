pub mod gateways;

mod email_author;
mod email_other_commentators;
mod increment_comment_count;

pub use email_author::EmailAuthor;
pub use email_other_commentators::EmailOtherCommentators;
pub use increment_comment_count::IncrementCommentCount;
