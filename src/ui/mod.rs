pub(crate) mod render;
pub(crate) mod session;
pub(crate) mod util;

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
#[cfg(test)]
#[path = "util_tests.rs"]
mod util_tests;
