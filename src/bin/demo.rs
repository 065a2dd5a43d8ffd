//! Demo binary for concise-display E2E testing.
//!
//! This binary exercises the public API for PTY-based integration tests.
//! Each subcommand renders one kind of event; `replay` drives the hook with
//! JSON lines read from stdin.

use concise_display::{
    ConciseDisplay, DisplayConfig, EditPair, Event, Formatter, HookEvent, KNOWN_TOOLS,
    StdoutSink,
};
use serde_json::{Value, json};
use std::env;
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::Arc;

fn print_rendered(formatter: &Formatter, event: &Event) {
    if let Some(text) = formatter.render(event) {
        println!("{}", text);
    }
}

/// Parse `--config <file>` from the trailing args, defaulting when absent.
fn load_config(args: &[String]) -> DisplayConfig {
    let path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1));
    match path {
        Some(path) => DisplayConfig::from_file(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => DisplayConfig::default(),
    }
}

fn main() {
    // Force color output even in non-TTY (for test capture)
    colored::control::set_override(true);

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: concise-display-demo <command> [args...]");
        eprintln!("Commands:");
        eprintln!("  tool-call <name> [params_json]");
        eprintln!("  tool-result <name> <result_json> [fail]");
        eprintln!("  thinking <text>");
        eprintln!("  tokens <input> <cached_fraction> <output>");
        eprintln!("  file-edit <path> <removed> <added>");
        eprintln!("  replay [--config <file>]");
        eprintln!("  hooks");
        std::process::exit(1);
    }

    let config = load_config(&args[2..]);
    let formatter = Formatter::new(config.clone());

    match args[1].as_str() {
        "tool-call" => {
            let name = args.get(2).map(|s| s.as_str()).unwrap_or("test_tool");
            let params_json = args.get(3).map(|s| s.as_str()).unwrap_or("{}");
            let params: Value = serde_json::from_str(params_json).unwrap_or(json!({}));
            let event = Event::ToolCallStart {
                tool: name.to_string(),
                params: params.as_object().cloned().unwrap_or_default(),
            };
            print_rendered(&formatter, &event);
        }

        "tool-result" => {
            let name = args.get(2).map(|s| s.as_str()).unwrap_or("test_tool");
            let result_json = args.get(3).map(|s| s.as_str()).unwrap_or("\"done\"");
            // Anything that isn't JSON is treated as plain text output
            let result: Value =
                serde_json::from_str(result_json).unwrap_or_else(|_| json!(result_json));
            let success = args.get(4).map(|s| s.as_str()) != Some("fail");
            let event = Event::ToolCallResult {
                tool: name.to_string(),
                result,
                success,
            };
            print_rendered(&formatter, &event);
        }

        "thinking" => {
            let text = args
                .get(2)
                .map(|s| s.as_str())
                .unwrap_or("Thinking about it.");
            let event = Event::Thinking {
                text: text.replace("\\n", "\n"),
            };
            print_rendered(&formatter, &event);
        }

        "tokens" => {
            let input: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(54000);
            let cached: f64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0.97);
            let output: u64 = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(646);
            let event = Event::TokenSummary {
                input_tokens: input,
                cached_fraction: cached,
                output_tokens: output,
                caching: false,
            };
            print_rendered(&formatter, &event);
        }

        "file-edit" => {
            let path = args.get(2).map(|s| s.as_str()).unwrap_or("config.toml");
            let removed = args.get(3).map(|s| s.as_str()).unwrap_or("old_value = \"foo\"");
            let added = args.get(4).map(|s| s.as_str()).unwrap_or("new_value = \"bar\"");
            let event = Event::FileEdit {
                path: path.to_string(),
                edits: vec![EditPair::new(removed, added)],
            };
            print_rendered(&formatter, &event);
        }

        "replay" => {
            // Each line: {"event": "tool:pre", "data": {...}}
            let hook = ConciseDisplay::new(config, Arc::new(StdoutSink));
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if line.trim().is_empty() {
                    continue;
                }
                let Ok(record) = serde_json::from_str::<Value>(&line) else {
                    eprintln!("Skipping malformed line: {}", line);
                    continue;
                };
                let name = record.get("event").and_then(Value::as_str).unwrap_or("");
                let data = record.get("data").cloned().unwrap_or(Value::Null);
                hook.handle(name, &data);
            }
        }

        "hooks" => {
            for event in HookEvent::ALL {
                println!("{}", event.name());
            }
            println!("tools: {}", KNOWN_TOOLS.join(", "));
        }

        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}
