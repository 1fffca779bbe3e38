//! HTTP request and response types

mod body;
mod request;
mod response;

pub use body::{collect_body, parse_form};
pub use request::Request;
pub use response::{HttpResponse, Redirect, Response, ResponseExt};
