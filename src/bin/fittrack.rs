// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fittrack_client::auth::CredentialStore;
use fittrack_client::client::ApiClient;
use fittrack_client::config::ClientConfig;
use fittrack_client::feedback::{FeedbackEvent, SoundManager};
use fittrack_client::constants::defaults::CURRENCY;
use fittrack_client::format::{
    format_duration, format_rest_time, format_weight, format_workout_date, DurationStyle,
};
use fittrack_client::logging;
use fittrack_client::models::RegisterRequest;
use fittrack_client::repositories::Repositories;
use fittrack_client::session::ActiveWorkoutSession;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(author, version, about = "Command line client for the FitTrack backend")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
    },
    /// Forget the stored session
    Logout,
    /// List your workout plans
    Plans,
    /// List the exercise catalog
    Exercises,
    /// List past workouts
    History,
    /// Show training statistics
    Stats,
    /// Show the current subscription and its limits
    Subscription,
    /// Start a workout from a plan
    Start {
        #[arg(long)]
        plan_id: i64,
    },
    /// Mark a workout as completed
    Complete {
        #[arg(long)]
        workout_id: i64,
        /// Total duration in minutes
        #[arg(long)]
        minutes: i64,
        #[arg(long)]
        note: Option<String>,
    },
    /// Start a PayPal donation
    Donate {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        message: Option<String>,
        /// Allow the message to be shown publicly
        #[arg(long)]
        public: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_from_env()?;

    let cli = Cli::parse();
    let config = ClientConfig::load(cli.config)?;
    info!("{}", config.summary());

    let client = Arc::new(ApiClient::new(&config)?);
    let credentials = Arc::new(CredentialStore::load_from(config.session_path())?);
    client.attach_token_source(credentials.clone()).await;
    let repos = Repositories::new(client, credentials.clone());

    match cli.command {
        Commands::Login { username, password } => {
            let session = repos.auth.login(&username, &password).await?;
            println!("Signed in as {} (user {})", session.username, session.user_id);
        }
        Commands::Register {
            username,
            password,
            email,
            name,
        } => {
            let request = RegisterRequest {
                username,
                password,
                email,
                name,
            };
            let response = repos.auth.register(&request).await?;
            println!(
                "{}",
                response.message.as_deref().unwrap_or(if response.success {
                    "Registration complete"
                } else {
                    "Registration failed"
                })
            );
        }
        Commands::Logout => {
            repos.auth.logout().await?;
            println!("Signed out");
        }
        Commands::Plans => {
            let user_id = require_user(&credentials).await?;
            for plan in repos.plans.list_plans(user_id).await? {
                println!("[{}] {} ({} exercises)", plan.id, plan.name, plan.exercises.len());
                for exercise in plan.ordered_exercises() {
                    println!(
                        "    {} {}x{} @ {} kg, rest {}",
                        exercise.name,
                        exercise.sets,
                        exercise.reps,
                        format_weight(exercise.weight),
                        format_rest_time(exercise.rest_seconds)
                    );
                }
            }
        }
        Commands::Exercises => {
            for exercise in repos.exercises.list_exercises().await? {
                println!(
                    "[{}] {} ({})",
                    exercise.id,
                    exercise.name,
                    exercise.muscle_group.as_deref().unwrap_or("-")
                );
            }
        }
        Commands::History => {
            let user_id = require_user(&credentials).await?;
            for workout in repos.history.list_history(user_id).await? {
                println!(
                    "{}  {}  {}",
                    format_workout_date(&workout.date),
                    workout.plan_name.as_deref().unwrap_or("-"),
                    workout.formatted_duration()
                );
            }
        }
        Commands::Stats => {
            let user_id = require_user(&credentials).await?;
            let stats = repos.stats.user_stats(user_id).await?;
            if !stats.has_data() {
                println!("No workouts recorded yet");
            } else {
                println!("Workouts:        {}", stats.total_workouts);
                println!("Current streak:  {}", stats.current_streak);
                println!("Longest streak:  {}", stats.longest_streak);
                println!("Sets completed:  {}", stats.total_sets_completed);
            }
        }
        Commands::Subscription => match repos.subscriptions.current_subscription().await? {
            Some(subscription) => {
                println!(
                    "Plan: {} ({:.2} {})",
                    subscription.plan_name, subscription.price, CURRENCY
                );
                match subscription.workouts_remaining() {
                    Some(left) => println!("Workouts left: {}", left),
                    None => println!("Workouts: unlimited"),
                }
            }
            None => println!("No subscription information available"),
        },
        Commands::Start { plan_id } => {
            let user_id = require_user(&credentials).await?;
            let session = ActiveWorkoutSession::new(repos.workouts.clone());
            let workout = session.start(user_id, plan_id).await?;
            println!(
                "Workout {} started (session {}), {} exercises",
                workout.id,
                workout.session_id,
                workout.exercises.len()
            );

            let sounds = SoundManager::with_defaults(config.feedback.clone());
            sounds.play_and_wait(FeedbackEvent::CountdownBeep, true).await;
            sounds.shutdown().await;
        }
        Commands::Complete {
            workout_id,
            minutes,
            note,
        } => {
            repos.workouts.complete_workout(workout_id, minutes, note).await?;
            println!(
                "Workout {} completed in {}",
                workout_id,
                format_duration(Some(minutes), DurationStyle::History)
            );

            let sounds = SoundManager::with_defaults(config.feedback.clone());
            sounds.play_and_wait(FeedbackEvent::WorkoutComplete, true).await;
            sounds.shutdown().await;
        }
        Commands::Donate {
            amount,
            message,
            public,
        } => {
            let response = repos.payments.donate(amount, message, public).await?;
            match response.approval_url {
                Some(url) => println!("Approve the donation at {}", url),
                None => println!("Donation created, order {}", response.order_id.unwrap_or_default()),
            }
        }
    }

    Ok(())
}

async fn require_user(credentials: &CredentialStore) -> Result<i64> {
    credentials
        .user_id()
        .await
        .context("Not signed in; run `fittrack login` first")
}
