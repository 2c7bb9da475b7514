use std::env;
use std::io::stdout;
use std::process::exit;

use flownet::call_context::CallContext;
use flownet::graph;
use flownet::io;
use flownet::FlowError;

fn main() {
    env_logger::init();

    let mut args = env::args().collect::<Vec<_>>();
    let json_output = if args.get(1) == Some(&"--json".to_string()) {
        args = [vec![args[0].clone()], args[2..].to_vec()].concat();
        true
    } else {
        false
    };

    if args.len() != 2 {
        println!("Usage: cli [--json] <scenario.json>");
        println!("Option --json prints the result as a JSON document instead of a table.");
        exit(2);
    }

    if let Err(e) = run(&args[1], json_output) {
        eprintln!("Error: {e}");
        exit(1);
    }
}

fn run(scenario_file: &str, json_output: bool) -> Result<(), FlowError> {
    let scenario = io::read_scenario_json(scenario_file)?;
    let network = scenario.network()?;
    log::info!(
        "Read {} nodes and {} edges from {scenario_file}",
        network.node_count(),
        network.edge_count()
    );

    let call_context = CallContext::new(scenario_file);
    let report = graph::solve(&network, &scenario.intermediates, &call_context)?;

    if json_output {
        println!("{}", io::report_to_json(&report));
    } else {
        io::write_flow_table(&mut stdout(), &report)?;
    }
    Ok(())
}
