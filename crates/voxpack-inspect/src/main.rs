use std::path::PathBuf;
use std::process;

use voxpack_config::defaults::DEFAULT_PROFILE_RON;
use voxpack_config::load_validated_profile;
use voxpack_inspect::report;

fn usage() {
    eprintln!("Usage: voxpack-inspect <mesh.vxpk> [OPTIONS]");
    eprintln!("  --profile <path>   Codec profile RON (default: built-in)");
    eprintln!("  --limit <n>        Print at most n vertices");
    eprintln!("  --json             Print JSON instead of a markdown table");
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {message}");
    process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut mesh_path: Option<PathBuf> = None;
    let mut profile_path: Option<PathBuf> = None;
    let mut limit: Option<usize> = None;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--profile" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    fail("--profile needs a path");
                };
                profile_path = Some(PathBuf::from(path));
            }
            "--limit" => {
                i += 1;
                let Some(n) = args.get(i).and_then(|s| s.parse::<usize>().ok()) else {
                    fail("invalid --limit value");
                };
                limit = Some(n);
            }
            "--json" => json = true,
            "--help" | "-h" => {
                usage();
                process::exit(0);
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown argument: {}", other);
                usage();
                process::exit(1);
            }
            other => {
                if mesh_path.is_some() {
                    fail(format!("unexpected extra argument: {other}"));
                }
                mesh_path = Some(PathBuf::from(other));
            }
        }
        i += 1;
    }

    let Some(mesh_path) = mesh_path else {
        usage();
        process::exit(1);
    };

    let profile_ron = match &profile_path {
        Some(path) => std::fs::read_to_string(path)
            .unwrap_or_else(|e| fail(format!("failed to read {}: {e}", path.display()))),
        None => DEFAULT_PROFILE_RON.to_string(),
    };
    let (profile, _warnings) = load_validated_profile(&profile_ron).unwrap_or_else(|e| fail(e));
    log::info!(
        "Profile: layout {:?}, atlas {}x{} texels, chunk side {}",
        profile.layout,
        profile.atlas.columns,
        profile.atlas.tile_texels,
        profile.chunk_side
    );

    let bytes = std::fs::read(&mesh_path)
        .unwrap_or_else(|e| fail(format!("failed to read {}: {e}", mesh_path.display())));
    log::info!("Read {} bytes from {}", bytes.len(), mesh_path.display());

    let report = report::inspect(&bytes, &profile, limit).unwrap_or_else(|e| fail(e));

    if json {
        let out = report::format_json(&report).unwrap_or_else(|e| fail(e));
        println!("{out}");
    } else {
        println!("\n## {}\n", mesh_path.display());
        println!("{}", report::format_markdown(&report));
    }
}
