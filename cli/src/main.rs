use authgate_client::net::api::{AuthClient, DEFAULT_BASE_URL};
use authgate_client::net::error::AuthError;
use authgate_client::net::types::{SignInRequest, SignInResponse, SignUpRequest};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "authgate", about = "Sign up, sign in and log out against an /auth endpoint")]
struct Cli {
    #[arg(long, env = "AUTHGATE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Print raw JSON responses instead of a summary line.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new account.
    Signup(SignupArgs),
    /// Sign in and print the server's response.
    Signin(Credentials),
    /// End the current session.
    Logout,
    /// Sign in, then log out through the same cookie jar.
    Session(Credentials),
}

#[derive(Args, Debug)]
struct SignupArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "AUTHGATE_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Args, Debug)]
struct Credentials {
    #[arg(long)]
    email: String,
    #[arg(long, env = "AUTHGATE_PASSWORD", hide_env_values = true)]
    password: String,
}

impl From<SignupArgs> for SignUpRequest {
    fn from(args: SignupArgs) -> Self {
        Self { username: args.username, email: args.email, password: args.password }
    }
}

impl From<Credentials> for SignInRequest {
    fn from(args: Credentials) -> Self {
        Self { email: args.email, password: args.password }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = AuthClient::new(cli.base_url)?;
    tracing::debug!(base_url = client.base_url(), "using auth endpoint");

    match cli.command {
        Command::Signup(args) => {
            let user = client.sign_up(&args.into()).await?;
            let summary = format!("created user {} <{}> (id {})", user.username, user.email, user.id);
            print_result(cli.json, &user, &summary)
        }
        Command::Signin(creds) => {
            let resp = client.sign_in(&creds.into()).await?;
            print_result(cli.json, &resp, &sign_in_summary(&resp))
        }
        Command::Logout => {
            let resp = client.logout().await?;
            print_result(cli.json, &resp, &resp.message)
        }
        Command::Session(creds) => {
            let signed_in = client.sign_in(&creds.into()).await?;
            print_result(cli.json, &signed_in, &sign_in_summary(&signed_in))?;
            let logged_out = client.logout().await?;
            print_result(cli.json, &logged_out, &logged_out.message)
        }
    }
}

fn sign_in_summary(resp: &SignInResponse) -> String {
    match (&resp.message, &resp.token) {
        (Some(message), Some(_)) => format!("{message} (token issued)"),
        (Some(message), None) => message.clone(),
        (None, Some(_)) => "signed in (token issued)".to_owned(),
        (None, None) => "signed in".to_owned(),
    }
}

fn print_result<T: Serialize>(json: bool, value: &T, summary: &str) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
