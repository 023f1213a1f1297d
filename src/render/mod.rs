// Fragment formatters: pure functions from one record to one markup string.
// Fields are interpolated verbatim; author-supplied JSON is trusted input.

pub mod experience;
pub mod projects;
pub mod publications;

pub use experience::render_experience;
pub use projects::render_project;
pub use publications::render_publication;
