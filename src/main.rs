//! Pong Env demo driver
//!
//! Seeds the action sampler and the environment identically, plays a fixed
//! number of random actions, resets on every terminal step and reports the
//! tally.
//!
//! Usage: `pong-env [STEPS] [CONFIG.json] [--paced]`

use rand::SeedableRng;
use rand_pcg::Pcg32;

use pong_env::renderer::{FrameRasterizer, Paced};
use pong_env::{EnvConfig, Environment};

const DEFAULT_STEPS: u64 = 99_999;
const SEED: u64 = 123;

struct Args {
    steps: u64,
    config: Option<String>,
    paced: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        steps: DEFAULT_STEPS,
        config: None,
        paced: false,
    };
    for arg in std::env::args().skip(1) {
        if arg == "--paced" {
            args.paced = true;
        } else if let Ok(steps) = arg.parse::<u64>() {
            args.steps = steps;
        } else if args.config.is_none() {
            args.config = Some(arg);
        } else {
            return Err(format!("unexpected argument: {arg}"));
        }
    }
    Ok(args)
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => EnvConfig::load(path)?,
        None => EnvConfig::default(),
    };
    let fps = config.render_fps;
    let mut env = Environment::new(config)?;
    let mut action_rng = Pcg32::seed_from_u64(SEED);
    let mut renderer = args.paced.then(|| Paced::new(FrameRasterizer, fps));

    env.reset(Some(SEED));

    let (mut episodes, mut agent_points, mut opponent_points) = (0u64, 0u64, 0u64);
    let mut total_reward = 0.0f64;

    for _ in 0..args.steps {
        if let Some(renderer) = renderer.as_mut() {
            let frame = env.render(renderer)?;
            log::trace!("frame {:?}", frame.shape());
        }

        let action = env.action_space().sample(&mut action_rng);
        let result = env.step(action)?;
        total_reward += f64::from(result.reward);

        if result.terminated {
            episodes += 1;
            if result.info.right_score > 0 {
                agent_points += 1;
            } else {
                opponent_points += 1;
            }
            log::debug!(
                "episode {} ended after {} steps, reward {}",
                episodes,
                result.info.steps,
                result.reward
            );
            env.reset(None);
        }
    }

    log::info!(
        "{} steps, {} episodes: agent {} - opponent {}, total reward {}",
        args.steps,
        episodes,
        agent_points,
        opponent_points,
        total_reward
    );
    println!(
        "episodes={episodes} agent={agent_points} opponent={opponent_points} reward={total_reward}"
    );

    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Pong Env (native) starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\nusage: pong-env [STEPS] [CONFIG.json] [--paced]");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
