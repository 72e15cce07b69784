//! Server Configuration
//!
//! Startup configuration parsed once from command-line arguments before the
//! listener is bound. The values are read-only for the lifetime of the
//! process; `dir` and `dbfilename` are surfaced to clients solely through
//! `CONFIG GET` and are never used to read or write a file.

/// Read-only server configuration.
///
/// Shared across all connections behind an `Arc`; never mutated after
/// startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory where the RDB file would be stored (echoed by CONFIG GET)
    pub dir: String,
    /// Name of the RDB file (echoed by CONFIG GET)
    pub dbfilename: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: crate::DEFAULT_PORT,
            dir: String::new(),
            dbfilename: String::new(),
        }
    }
}

impl ServerConfig {
    /// Parse configuration from command-line arguments.
    pub fn from_args() -> Self {
        Self::parse(std::env::args().skip(1))
    }

    fn parse(args: impl Iterator<Item = String>) -> Self {
        let mut config = ServerConfig::default();
        let args: Vec<String> = args.collect();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--host" | "-h" => {
                    if i + 1 < args.len() {
                        config.host = args[i + 1].clone();
                        i += 2;
                    } else {
                        eprintln!("Error: --host requires a value");
                        std::process::exit(1);
                    }
                }
                "--port" | "-p" => {
                    if i + 1 < args.len() {
                        config.port = args[i + 1].parse().unwrap_or_else(|_| {
                            eprintln!("Error: invalid port number");
                            std::process::exit(1);
                        });
                        i += 2;
                    } else {
                        eprintln!("Error: --port requires a value");
                        std::process::exit(1);
                    }
                }
                "--dir" => {
                    if i + 1 < args.len() {
                        config.dir = args[i + 1].clone();
                        i += 2;
                    } else {
                        eprintln!("Error: --dir requires a value");
                        std::process::exit(1);
                    }
                }
                "--dbfilename" => {
                    if i + 1 < args.len() {
                        config.dbfilename = args[i + 1].clone();
                        i += 2;
                    } else {
                        eprintln!("Error: --dbfilename requires a value");
                        std::process::exit(1);
                    }
                }
                "--help" => {
                    print_help();
                    std::process::exit(0);
                }
                "--version" | "-v" => {
                    println!("redlet version {}", crate::VERSION);
                    std::process::exit(0);
                }
                other => {
                    eprintln!("Unknown argument: {}", other);
                    print_help();
                    std::process::exit(1);
                }
            }
        }

        config
    }

    /// Returns the bind address as a string.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Looks up a parameter exposed through `CONFIG GET`.
    ///
    /// Returns `None` for parameters the server does not expose; an unknown
    /// parameter is a lookup miss, not an error.
    pub fn get_parameter(&self, param: &str) -> Option<&str> {
        match param {
            "dir" => Some(&self.dir),
            "dbfilename" => Some(&self.dbfilename),
            _ => None,
        }
    }
}

fn print_help() {
    println!(
        r#"
redlet - A minimal Redis-compatible in-memory key-value server

USAGE:
    redlet [OPTIONS]

OPTIONS:
    -h, --host <HOST>          Host to bind to (default: 127.0.0.1)
    -p, --port <PORT>          Port to listen on (default: 6379)
        --dir <PATH>           Directory reported by CONFIG GET dir
        --dbfilename <NAME>    Filename reported by CONFIG GET dbfilename
    -v, --version              Print version information
        --help                 Print this help message

EXAMPLES:
    redlet                                 # Start on 127.0.0.1:6379
    redlet --port 6380                     # Start on port 6380
    redlet --dir /tmp --dbfilename dump.rdb
"#
    );
}
