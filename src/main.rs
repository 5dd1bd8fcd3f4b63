//! Command line front end: sample and check poses, convert orientations, and run the
//! scripted demo on the simulated robot.
//!
//! ```text
//! rs-ur-workspace --preset bench sample --count 5
//! rs-ur-workspace check 0.14 -0.5 0.4 90 10 0
//! rs-ur-workspace --config robot.yaml --mode hard-fail demo --repetitions 2
//! RUST_LOG=debug rs-ur-workspace demo
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rs_ur_workspace::environment::Environment;
use rs_ur_workspace::parameters::ur_workspace::{FailureMode, Parameters};
use rs_ur_workspace::pose::RpyPose;
use rs_ur_workspace::rotation::rpy_to_rotation_vector;
use rs_ur_workspace::sampler::WorkspaceSampler;
use rs_ur_workspace::simulated::SimulatedRobot;
use rs_ur_workspace::utils::{dump_joints, dump_pose, dump_rpy_pose};

#[derive(Parser, Debug)]
#[command(name = "rs-ur-workspace", version, about = "UR5 workspace sampling and pose validation")]
struct CommandLineArguments {
    /// YAML file with the workspace parameters
    #[arg(long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Built-in parameters: ur5 or bench
    #[arg(long, default_value = "ur5")]
    preset: String,

    /// Overrides the failure mode of the configuration: clamp-to-home or hard-fail
    #[arg(long)]
    mode: Option<FailureMode>,

    /// Seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Print random poses from the workspace as move commands
    Sample {
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Validate the pose given as position (m) and roll, pitch, yaw (degrees)
    Check {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
        #[arg(allow_negative_numbers = true)]
        roll: f64,
        #[arg(allow_negative_numbers = true)]
        pitch: f64,
        #[arg(allow_negative_numbers = true)]
        yaw: f64,
    },
    /// Convert roll, pitch, yaw in degrees into the rotation vector
    Convert {
        #[arg(allow_negative_numbers = true)]
        roll: f64,
        #[arg(allow_negative_numbers = true)]
        pitch: f64,
        #[arg(allow_negative_numbers = true)]
        yaw: f64,
    },
    /// Run the session and the scripted waypoints on the simulated robot
    Demo {
        #[arg(long, default_value_t = 1)]
        repetitions: usize,
    },
    /// Print the effective parameters as YAML
    DumpConfig,
}

fn load_parameters(args: &CommandLineArguments) -> Result<Parameters> {
    let mut parameters = match &args.config {
        Some(path) => Parameters::from_yaml_file(path)
            .with_context(|| format!("Failed to read parameters from {}", path.display()))?,
        None => Parameters::preset(&args.preset)
            .ok_or_else(|| anyhow!("Unknown preset '{}' (expected ur5 or bench)", args.preset))?,
    };
    if let Some(mode) = args.mode {
        parameters.failure_mode = mode;
    }
    Ok(parameters)
}

fn sampler(parameters: &Parameters, seed: Option<u64>) -> Result<WorkspaceSampler> {
    let region = parameters.region()?;
    Ok(match seed {
        Some(seed) => WorkspaceSampler::with_seed(region, seed),
        None => WorkspaceSampler::new(region),
    })
}

fn demo(parameters: &Parameters, seed: Option<u64>, repetitions: usize) -> Result<()> {
    let robot = SimulatedRobot::default();
    let mut env = match seed {
        Some(seed) => Environment::with_seed(robot, parameters, seed)?,
        None => Environment::new(robot, parameters)?,
    };

    env.starting_position()?;
    env.robot_home_position()?;
    let target = env.tool_move_pose_test()?;
    print!("Random move: ");
    dump_pose(&target);

    let sequence = env.hard_code_solution(repetitions)?;
    println!("Waypoints:");
    for waypoint in &sequence {
        dump_pose(waypoint);
    }

    if parameters.reset_joints.is_some() {
        env.move_reset_position()?;
    }
    print!("Joints: ");
    dump_joints(&env.read_joint_state()?);
    print!("Tool: ");
    dump_pose(&env.read_tool_pose()?);
    env.log_robot_data()?;

    info!("{} commands sent", env.robot().commands().len());
    Ok(())
}

/// Log filter from the `RUST_LOG` directives, `info` if they are missing or not valid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();

    let args = CommandLineArguments::parse();
    let parameters = load_parameters(&args)?;

    match args.command {
        Action::Sample { count } => {
            let mut sampler = sampler(&parameters, args.seed)?;
            for _ in 0..count {
                let pose = sampler.sample_pose();
                dump_rpy_pose(&pose);
                dump_pose(&pose.to_tcp_pose());
            }
        }
        Action::Check { x, y, z, roll, pitch, yaw } => {
            let validator = parameters.validator()?;
            let pose = RpyPose::new(x, y, z, roll, pitch, yaw);
            let violations = validator.violations(&pose);
            if violations.is_empty() {
                println!("Pose is inside the workspace");
            }
            for violation in &violations {
                println!("{}", violation);
            }
            let command = validator.check_pose(&pose)?;
            print!("Command: ");
            dump_pose(&command);
        }
        Action::Convert { roll, pitch, yaw } => {
            let rv = rpy_to_rotation_vector(roll, pitch, yaw);
            println!("[{:.6}, {:.6}, {:.6}]", rv.x, rv.y, rv.z);
        }
        Action::Demo { repetitions } => demo(&parameters, args.seed, repetitions)?,
        Action::DumpConfig => println!("{}", parameters.to_yaml()),
    }
    Ok(())
}
