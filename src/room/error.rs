use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SendMessageError {
	#[error("Author was empty or whitespace-only.")]
	AuthorEmpty,
	#[error("Message text was empty or whitespace-only.")]
	TextEmpty,
}
