pub const DEFAULT_CLIENT_IP: &str = "127.0.0.1";
