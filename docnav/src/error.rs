use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("no page registered for route key '{key}'"))]
    RouteNotFound { key: String },
}

pub type Result<T> = std::result::Result<T, Error>;
