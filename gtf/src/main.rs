use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use cpack::io::import::Importer;
use gtf::config::GTFConfig;
use gtf::io;
use gtf::io::cli::Cli;
use gtf::io::layout_to_svg::layout_to_svg;
use gtf::io::output::{GTFOutput, export_solution};
use gtf::opt::gtf_optimizer::GTFOptimizer;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: GTFConfig = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GTFConfig::default()
        }
        Some(config_file) => {
            io::read_json(&config_file).context("incorrect config file format")?
        }
    };

    let config = args.override_config(config);

    info!("Successfully parsed GTFConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file name: {:?}", args.input_file))?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let importer = Importer::new(config.size_mode);
    let mut instance = importer.import_instance(&ext_instance)?;

    info!(
        "[MAIN] instance {} loaded: {} items on a {:.3} x {:.3} surface",
        instance.name,
        instance.items.len(),
        instance.surface.width(),
        instance.surface.height()
    );

    let mut optimizer = GTFOptimizer::new(instance.surface, instance.frame, config);
    let solution = optimizer.solve(&mut instance.items);

    {
        let output = GTFOutput {
            instance: ext_instance,
            solution: export_solution(&solution, &instance.items, &instance.frame),
            config,
        };

        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.svg"));
        let svg = layout_to_svg(
            &solution.layout,
            &instance.items,
            config.svg_draw_options,
            &instance.name,
        );

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
