/// One request line of a W3C extended access log.
///
/// Every column is kept as text except `time_taken`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub date: String,
    pub time: String,
    pub server_ip: String,
    pub method: String,
    pub uri_stem: String,
    pub uri_query: String,
    pub port: String,
    pub username: String,
    pub client_ip: String,
    pub user_agent: String,
    pub referer: String,
    pub status: String,
    pub sub_status: String,
    pub win32_status: String,
    pub time_taken: u64,
}

/// Column names in the order they appear on each line.
pub const FIELDS: [&str; 15] = [
    "date",
    "time",
    "s-ip",
    "cs-method",
    "cs-uri-stem",
    "cs-uri-query",
    "s-port",
    "cs-username",
    "c-ip",
    "cs(User-Agent)",
    "cs(Referer)",
    "sc-status",
    "sc-substatus",
    "sc-win32-status",
    "time-taken",
];
