use chrono::{NaiveDate, NaiveTime};
use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 4] = [("GET", 6), ("POST", 2), ("PUT", 1), ("DELETE", 1)];
const PATHS: [(&str, u8); 9] = [
    ("/", 10),
    ("/login", 10),
    ("/app/reports", 30),
    ("/app/to-do", 25),
    ("/app/report-history", 10),
    ("/app/settings", 5),
    ("/api/session", 20),
    ("/favicon.ico", 10),
    ("/content/site.css", 15),
];
const STATUS: [(u16, u8); 6] = [
    (200, 50),
    (302, 10),
    (304, 10),
    (401, 20),
    (404, 50),
    (500, 5),
];
const AGENTS: [(&str, u8); 4] = [
    ("Mozilla/5.0+(Windows+NT+10.0;+Win64;+x64)", 30),
    ("Mozilla/5.0+(Macintosh;+Intel+Mac+OS+X+10_15_7)", 10),
    ("Mozilla/5.0+(X11;+Linux+x86_64)", 5),
    ("curl/8.4.0", 1),
];
const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

pub const FIELDS: &str = "date time s-ip cs-method cs-uri-stem cs-uri-query s-port cs-username c-ip cs(User-Agent) cs(Referer) sc-status sc-substatus sc-win32-status time-taken";

/// Comment lines IIS writes at the top of every log file.
pub fn header(date: NaiveDate) -> String {
    format!(
        "#Software: Microsoft Internet Information Services 10.0\n#Version: 1.0\n#Date: {} 00:00:00\n#Fields: {FIELDS}\n",
        date.format("%Y-%m-%d")
    )
}

pub fn random_time<R: Rng + ?Sized>(rng: &mut R) -> NaiveTime {
    let secs = rng.random_range(0..SECONDS_PER_DAY);
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or_default()
}

pub fn generate_w3c_log<R: Rng + ?Sized>(rng: &mut R, date: NaiveDate, time: NaiveTime) -> String {
    let client_ip = format!(
        "192.168.{}.{}",
        rng.random_range(0..256),
        rng.random_range(0..256)
    );
    let method = METHODS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let agent = AGENTS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let query = if rng.random_bool(0.2) {
        format!("id={}", rng.random_range(1..500))
    } else {
        "-".to_string()
    };
    let username = if status == 401 { "-" } else { "CORP\\jdoe" };
    let win32 = if status == 500 { 64 } else { 0 };
    let taken = rng.random_range(1..3000);

    format!(
        "{} {} 10.0.0.4 {method} {path} {query} 443 {username} {client_ip} {agent} - {status} 0 {win32} {taken}",
        date.format("%Y-%m-%d"),
        time.format("%H:%M:%S"),
    )
}
