use std::path::PathBuf;

use gluegen_compiler::{Generator, MemoryPersistence};

use super::pipeline;

pub struct CheckArgs {
    pub dumps: Vec<PathBuf>,
    pub policy: Option<PathBuf>,
    pub namespace: Option<String>,
}

pub fn run(args: CheckArgs) {
    let policy = match pipeline::load_policy(args.policy.as_deref()) {
        Ok(policy) => policy,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let config = pipeline::config(args.namespace.as_deref(), None, None);
    let resolver = pipeline::resolver(false, &[]);
    let mut generator = Generator::new(config, policy, resolver, MemoryPersistence::new());

    if let Err(e) = pipeline::run(&mut generator, &args.dumps) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let persistence = generator.persistence();
    println!(
        "{} units in {} modules",
        persistence.files().len(),
        generator.modules().len()
    );
    print!("{}", generator.stats());
}
