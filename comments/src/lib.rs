mod added_comment;

pub use added_comment::AddedComment;

/// Identifier of the blog post a comment belongs to.
pub type PostId = u64;
