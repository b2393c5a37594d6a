pub mod http_list_fetcher;

pub use http_list_fetcher::HttpListFetcher;
