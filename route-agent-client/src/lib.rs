//! HTTP side of the route agent.
//!
//! Talks to the routing backend over `POST /api/route` and `GET /health`. Built on reqwest so the
//! same code runs natively (tests) and in the browser, where reqwest goes through `fetch`.

pub mod route_api;
pub mod submit;

pub use route_api::{HttpRouteApi, RouteApi};
pub use submit::run_submission;
