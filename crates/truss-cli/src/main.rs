use std::process::ExitCode;

use truss_solver::{AnalysisConfig, StaticAnalysis};

fn usage() {
    eprintln!("usage: truss-cli solve <input.txt> [output.txt] [--json]");
}

fn main() -> ExitCode {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = if let Some(pos) = args.iter().position(|a| a == "--json") {
        args.remove(pos);
        true
    } else {
        false
    };

    if args.len() < 2 || args.len() > 3 || args[0] != "solve" {
        usage();
        return ExitCode::from(2);
    }
    let input = &args[1];
    let output = args.get(2).map(String::as_str);

    let model = match truss_io::read_model_file(input) {
        Ok(model) => model,
        Err(err) => {
            eprintln!("failed to load {input}: {err}");
            return ExitCode::from(1);
        }
    };
    println!("{}", model.statistics().format());

    let analysis = StaticAnalysis::new(AnalysisConfig {
        verbose: true,
        ..Default::default()
    });
    let results = match analysis.run(&model) {
        Ok(results) => results,
        Err(err) => {
            eprintln!("solve failed: {err}");
            return ExitCode::from(1);
        }
    };

    match output {
        Some(path) => {
            let written = if json {
                truss_io::write_results_json(path, &results)
            } else {
                truss_io::write_results_txt(path, &results)
            };
            if let Err(err) = written {
                eprintln!("failed to write {path}: {err}");
                return ExitCode::from(1);
            }
            println!(
                "solved {} DOFs, wrote {path} at {}",
                results.num_dofs,
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
            );
        }
        None => {
            // No output file: report to stdout
            if json {
                match serde_json::to_string_pretty(&results) {
                    Ok(text) => println!("{text}"),
                    Err(err) => {
                        eprintln!("failed to encode results: {err}");
                        return ExitCode::from(1);
                    }
                }
            } else {
                print!("{}", truss_io::results_to_string(&results));
            }
        }
    }
    ExitCode::SUCCESS
}
