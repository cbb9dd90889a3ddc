// Resume export: stored resume → canonical render model → template markup → print document.
// Rendering is pure and runs inside tokio::task::spawn_blocking (see pipeline).

pub mod dates;
pub mod handlers;
pub mod model;
pub mod normalize;
pub mod picture;
pub mod pipeline;
pub mod print;
pub mod templates;
