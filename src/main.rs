use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use woiya::{
    Config, Controller, HttpApi, NoticeKind, Page, SqliteTokenStore,
    core::session::{BidForm, JobForm, RegisterForm},
    models::{DashboardStats, Job, JobCategory, Role, format_rupiah},
};

#[derive(Parser)]
#[command(name = "woiya")]
#[command(about = "Client for the WOIYA services marketplace")]
struct Cli {
    /// Base URL of the marketplace API (overrides WOIYA_BACKEND_URL)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Directory holding the saved session (overrides WOIYA_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the desktop client (default)
    Gui,
    /// Log in and remember the session
    Login {
        email: String,
        #[arg(long, env = "WOIYA_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and log in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long, env = "WOIYA_PASSWORD", hide_env_values = true)]
        password: String,
        /// seeker or provider
        #[arg(long, value_parser = parse_role, default_value = "seeker")]
        role: Role,
    },
    /// Forget the saved session
    Logout,
    /// Show the signed-in user and their statistics
    Dashboard,
    /// List jobs
    Jobs {
        #[arg(long, value_parser = parse_category)]
        category: Option<JobCategory>,
    },
    /// Show one job with its bids
    Job { id: String },
    /// Post a new job (service seekers only)
    PostJob {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long, value_parser = parse_category)]
        category: JobCategory,
        #[arg(long)]
        budget_min: String,
        #[arg(long)]
        budget_max: String,
        #[arg(long)]
        address: String,
        /// Local time as YYYY-MM-DDTHH:MM, or RFC 3339
        #[arg(long)]
        deadline: String,
        #[arg(long = "requirement")]
        requirements: Vec<String>,
    },
    /// Bid on an open job (service providers only)
    Bid {
        job_id: String,
        #[arg(long)]
        amount: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        completion_time: String,
    },
    /// Accept a bid on one of your jobs
    SelectBid { job_id: String, bid_id: String },
    /// Show wallet balance and recent transactions
    Wallet,
}

fn parse_role(value: &str) -> anyhow::Result<Role> {
    Role::try_from(value)
}

fn parse_category(value: &str) -> anyhow::Result<JobCategory> {
    JobCategory::try_from(value)
}

type CliController = Controller<HttpApi, SqliteTokenStore>;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "woiya=debug" } else { "woiya=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()
        .with_api_url(args.api_url)
        .with_data_dir(args.data_dir);
    if args.verbose {
        println!("API: {}", config.api_url);
        println!("Session store: {:?}", config.token_db_path());
    }

    match args.command {
        // iced starts its own runtime
        None | Some(Command::Gui) => run_gui(config),
        Some(command) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(run_command(config, command))
        }
    }
}

#[cfg(feature = "gui")]
fn run_gui(config: Config) -> anyhow::Result<()> {
    woiya::gui::run(config)
}

#[cfg(not(feature = "gui"))]
fn run_gui(_config: Config) -> anyhow::Result<()> {
    anyhow::bail!("Built without the GUI; pass a subcommand (see --help)")
}

async fn run_command(config: Config, command: Command) -> anyhow::Result<()> {
    let api = HttpApi::new(&config)?;
    let store = SqliteTokenStore::new(config.token_db_path());
    let mut controller = Controller::new(api, store);

    match command {
        Command::Gui => anyhow::bail!("The GUI cannot be started from within a command"),
        Command::Login { email, password } => {
            controller.login(&email, &password).await;
            report(&controller)?;
            print_user(&controller);
        }
        Command::Register {
            name,
            email,
            phone,
            password,
            role,
        } => {
            let form = RegisterForm {
                full_name: name,
                email,
                phone,
                password,
                role,
            };
            controller.register(&form).await;
            report(&controller)?;
            print_user(&controller);
        }
        Command::Logout => {
            controller.logout().await;
            println!("Logged out");
        }
        Command::Dashboard => {
            require_session(&mut controller).await?;
            print_user(&controller);
            match &controller.state().stats {
                Some(stats) => print_stats(stats),
                None => println!("Statistics unavailable"),
            }
        }
        Command::Jobs { category } => {
            require_session(&mut controller).await?;
            controller.fetch_jobs(category).await;
            match &controller.state().jobs {
                Some(jobs) if jobs.is_empty() => println!("No jobs available"),
                Some(jobs) => {
                    for job in jobs {
                        print_job_line(job);
                    }
                }
                None => anyhow::bail!("Failed to fetch jobs"),
            }
        }
        Command::Job { id } => {
            require_session(&mut controller).await?;
            controller.view_job_details(&id).await;
            report(&controller)?;
            if let Some(job) = &controller.state().selected_job {
                print_job(job);
            }
        }
        Command::PostJob {
            title,
            description,
            category,
            budget_min,
            budget_max,
            address,
            deadline,
            requirements,
        } => {
            require_session(&mut controller).await?;
            controller.navigate(Page::CreateJob).await?;
            let form = JobForm {
                title,
                description,
                category,
                budget_min,
                budget_max,
                address,
                deadline,
                requirements,
            };
            controller.create_job(&form).await;
            report(&controller)?;
        }
        Command::Bid {
            job_id,
            amount,
            message,
            completion_time,
        } => {
            require_session(&mut controller).await?;
            controller.navigate(Page::Jobs).await?;
            let form = BidForm {
                amount,
                message,
                completion_time,
            };
            controller.place_bid(&job_id, &form).await;
            report(&controller)?;
        }
        Command::SelectBid { job_id, bid_id } => {
            require_session(&mut controller).await?;
            controller.select_bid(&job_id, &bid_id).await;
            report(&controller)?;
            if let Some(job) = &controller.state().selected_job {
                print_job(job);
            }
        }
        Command::Wallet => {
            require_session(&mut controller).await?;
            controller.navigate(Page::Wallet).await?;
            let state = controller.state();
            let Some(wallet) = &state.wallet else {
                anyhow::bail!("Failed to fetch wallet");
            };
            let user_id = state.user().map(|user| user.id.as_str()).unwrap_or_default();
            println!("Balance: {}", format_rupiah(wallet.balance));
            if wallet.recent_transactions.is_empty() {
                println!("No transactions yet");
            }
            for transaction in &wallet.recent_transactions {
                let (label, sign) = if transaction.is_outgoing_for(user_id) {
                    ("Payment", "-")
                } else {
                    ("Received", "+")
                };
                println!(
                    "  {:<9} {}{}  {}",
                    label,
                    sign,
                    format_rupiah(transaction.amount),
                    transaction.job_id.as_deref().unwrap_or("-")
                );
            }
        }
    }

    Ok(())
}

/// Restore the saved session or fail with a hint to log in.
async fn require_session(controller: &mut CliController) -> anyhow::Result<()> {
    controller.restore_session().await;
    if controller.state().session.is_authenticated() {
        Ok(())
    } else {
        anyhow::bail!("Not logged in; run `woiya login <EMAIL>` first")
    }
}

/// Print the pending notice; error notices fail the command.
fn report(controller: &CliController) -> anyhow::Result<()> {
    match &controller.state().notice {
        Some(notice) if notice.kind == NoticeKind::Error => anyhow::bail!("{}", notice.text),
        Some(notice) => {
            println!("{}", notice.text);
            Ok(())
        }
        None => Ok(()),
    }
}

fn print_user(controller: &CliController) {
    if let Some(user) = controller.state().user() {
        println!(
            "{} <{}> - {} - {}",
            user.full_name,
            user.email,
            user.role.label(),
            format_rupiah(user.wallet_balance)
        );
    }
}

fn print_stats(stats: &DashboardStats) {
    match stats {
        DashboardStats::Seeker(s) => {
            println!("Total jobs:     {}", s.total_jobs);
            println!("Active jobs:    {}", s.active_jobs);
            println!("Completed jobs: {}", s.completed_jobs);
            println!("Wallet balance: {}", format_rupiah(s.wallet_balance));
        }
        DashboardStats::Provider(p) => {
            println!("Total bids:     {}", p.total_bids);
            println!("Selected bids:  {}", p.selected_bids);
            println!("Total earnings: {}", format_rupiah(p.total_earnings));
            println!("Wallet balance: {}", format_rupiah(p.wallet_balance));
            println!("Rating:         {:.1}", p.rating);
        }
    }
}

fn print_job_line(job: &Job) {
    println!(
        "{}  [{}] {} ({} - {}), {} bids, {}",
        job.id,
        job.status,
        job.title,
        format_rupiah(job.budget_min),
        format_rupiah(job.budget_max),
        job.bids_count,
        job.category.label()
    );
}

fn print_job(job: &Job) {
    print_job_line(job);
    println!("  {}", job.description);
    println!("  Address: {}", job.address);
    if let Some(deadline) = &job.deadline {
        println!("  Deadline: {}", deadline);
    }
    for requirement in &job.requirements {
        println!("  - {}", requirement);
    }
    if job.bids.is_empty() {
        println!("  No bids yet");
    }
    for bid in &job.bids {
        let selected = if bid.is_selected || job.selected_bid_id.as_deref() == Some(&bid.id) {
            " (selected)"
        } else {
            ""
        };
        println!(
            "  bid {}: {} by {}{} - {}",
            bid.id,
            format_rupiah(bid.amount),
            bid.bidder_name.as_deref().unwrap_or("unknown"),
            selected,
            bid.message
        );
    }
}
