//! 服务模块

pub mod session_fetcher;

pub use session_fetcher::{
    FETCH_DELAY, FetchOptions, SessionFetcher, SessionList, SimulatedFetcher,
    create_session_fetcher, fetch_sessions,
};
