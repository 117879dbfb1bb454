use std::path::PathBuf;

use gluegen_compiler::{GeneratedFileManager, Generator};

use super::pipeline;

pub struct GenerateArgs {
    pub dumps: Vec<PathBuf>,
    pub out: PathBuf,
    pub project_dir: PathBuf,
    pub policy: Option<PathBuf>,
    pub namespace: Option<String>,
    pub project_plugin: bool,
    pub game_modules: Vec<String>,
    pub stats: bool,
}

pub fn run(args: GenerateArgs) {
    let policy = match pipeline::load_policy(args.policy.as_deref()) {
        Ok(policy) => policy,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let config = pipeline::config(
        args.namespace.as_deref(),
        Some(args.out.as_path()),
        Some(args.project_dir.as_path()),
    );
    let resolver = pipeline::resolver(args.project_plugin, &args.game_modules);
    let mut generator = Generator::new(config, policy, resolver, GeneratedFileManager::new());

    if let Err(e) = pipeline::run(&mut generator, &args.dumps) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if args.stats {
        println!("{} units written", generator.units_written());
        print!("{}", generator.stats());
    }
}
