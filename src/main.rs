//! Terminal front end.
//!
//! Plays the campaign interactively, lets the greedy robot play one game
//! with the board printed after every move, or runs many robot games in
//! parallel and prints a summary.
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use serde::Serialize;
use treecycle::Score;
use treecycle::play::Config;
use treecycle::play::Progress;
use treecycle::play::Session;
use treecycle::play::Status;
use treecycle::players::Human;
use treecycle::players::Player;
use treecycle::players::Robot;
use treecycle::players::render;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 1, help = "Level to start from (1-based)")]
    level: usize,
    #[arg(long, help = "Seed for reproducible boards")]
    seed: Option<u64>,
    #[arg(long, help = "Let the greedy robot play")]
    robot: bool,
    #[arg(long, default_value_t = 1, help = "Robot games to run in parallel")]
    games: usize,
    #[arg(long, help = "Print snapshots and outcomes as JSON lines")]
    json: bool,
    #[arg(long, help = "Log warnings only")]
    quiet: bool,
}

impl Args {
    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
    fn session(&self, seed: u64) -> anyhow::Result<Session> {
        let mut session = Session::new(Config::default(), SmallRng::seed_from_u64(seed))?;
        if self.level > 1 {
            session.start_level(self.level - 1);
        }
        Ok(session)
    }
}

/// How far one robot game got.
#[derive(Debug, Serialize)]
struct Summary {
    seed: u64,
    cleared: usize,
    score: Score,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    treecycle::log(match args.quiet {
        true => log::LevelFilter::Warn,
        false => log::LevelFilter::Info,
    });
    match (args.robot, args.games) {
        (true, 2..) => autoplay(&args),
        (true, _) => play(&args, Robot, false),
        (false, _) => play(&args, Human, true),
    }
}

/// One session driven by `player`. A lost level is retried when `retry`
/// is set, otherwise it ends the game.
fn play<P: Player>(args: &Args, mut player: P, retry: bool) -> anyhow::Result<()> {
    let seed = args.seed();
    log::info!("seed {}", seed);
    let mut session = args.session(seed)?;
    loop {
        if args.json {
            println!("{}", serde_json::to_string(&session.snapshot())?);
        }
        let Some(id) = player.decide(session.tree(), session.level()) else {
            break;
        };
        let outcome = session.rotate(id);
        if args.json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else if !retry {
            println!("\n{}\n\n{}", render(session.tree()), session.level());
        }
        player.notify(&outcome);
        match outcome.status {
            Status::Playing => continue,
            Status::Lost if !retry => break,
            status => println!("{}", status),
        }
        match session.proceed() {
            Progress::CampaignComplete => {
                println!("campaign complete");
                break;
            }
            progress => log::debug!("{:?}", progress),
        }
    }
    Ok(())
}

/// Many robot games, one per seed, each until the first lost level.
fn autoplay(args: &Args) -> anyhow::Result<()> {
    let seed = args.seed();
    let summaries = (0..args.games as u64)
        .into_par_iter()
        .map(|i| campaign(args, seed.wrapping_add(i)))
        .collect::<anyhow::Result<Vec<Summary>>>()?;
    if args.json {
        println!("{}", serde_json::to_string(&summaries)?);
        return Ok(());
    }
    let games = summaries.len().max(1);
    let cleared = summaries.iter().map(|s| s.cleared).sum::<usize>();
    let best = summaries.iter().max_by_key(|s| (s.cleared, s.score));
    println!("games      {}", summaries.len());
    println!("cleared    {:.2} levels/game", cleared as f32 / games as f32);
    if let Some(best) = best {
        println!(
            "best       {} levels, {} points (seed {})",
            best.cleared, best.score, best.seed
        );
    }
    Ok(())
}

fn campaign(args: &Args, seed: u64) -> anyhow::Result<Summary> {
    let mut session = args.session(seed)?;
    let mut robot = Robot;
    let mut cleared = 0;
    let mut score = 0;
    while let Some(id) = robot.decide(session.tree(), session.level()) {
        let outcome = session.rotate(id);
        if outcome.status != Status::Won {
            continue;
        }
        cleared += 1;
        score += outcome.level_score;
        if session.proceed() == Progress::CampaignComplete {
            break;
        }
    }
    if session.level().status() == Status::Lost {
        score += session.level().score();
    }
    Ok(Summary {
        seed,
        cleared,
        score,
    })
}
