// Resume screening: one job description against a batch of uploaded resumes.
// The pipeline is transport-agnostic; handlers only parse the multipart form.

pub mod handlers;
pub mod pipeline;
