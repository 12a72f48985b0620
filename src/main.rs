// Entry point: program main
// Handles --endpoint, --type, --help, one-shot searches, and runs the TUI
//
// TUI Docs: https://github.com/whit3rabbit/bubbletea-rs look for related crates there and examples on each of them.

use std::env;
use std::process;

use coupe::api;
use coupe::cocktail::{Cocktail, SearchMode, SearchRequest};
use coupe::ui::{initial_model, run_once, Model as UiModel};

use bubbletea_rs::{
    command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel, window_size,
    Program,
};
use crossterm::event::{KeyCode, KeyModifiers};

// Completion message delivered back into the program loop by search_cmd.
struct SearchDone(Result<Vec<Cocktail>, String>);

// Async command performing one POST to the search endpoint. Superseded
// requests are not cancelled; the last completion to arrive wins.
fn search_cmd(endpoint: String, req: SearchRequest) -> Cmd {
    Box::pin(async move {
        let outcome = api::search(&endpoint, &req).await;
        Some(Box::new(SearchDone(outcome)) as bubbletea_rs::event::Msg)
    })
}

fn endpoint_from_env() -> String {
    env::var("COUPE_ENDPOINT").unwrap_or_else(|_| api::DEFAULT_ENDPOINT.to_string())
}

// Adapter type implementing bubbletea-rs Model trait by delegating to our UiModel
struct TeaAdapter {
    inner: UiModel,
}

impl TeaAdapter {
    // Drain a search request recorded by the update logic into an async command.
    fn take_search(&mut self) -> Option<Cmd> {
        self.inner
            .take_pending_request()
            .map(|req| search_cmd(self.inner.endpoint.clone(), req))
    }
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let mut adapter = TeaAdapter {
            inner: initial_model(&endpoint_from_env()),
        };
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        adapter.inner.update(coupe::ui::Msg::WindowSize {
            width: width as usize,
            height: height as usize,
        });
        let cmd = window_size();
        (adapter, Some(cmd))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        if let Some(done) = msg.downcast_ref::<SearchDone>() {
            self.inner
                .update(coupe::ui::Msg::SearchFinished(done.0.clone()));
            return None;
        }
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            // Structured handling using crossterm types (KeyCode, KeyModifiers)
            match &km.key {
                KeyCode::Enter => {
                    self.inner.update(coupe::ui::Msg::KeyEnter);
                    return self.take_search();
                }
                KeyCode::Backspace => {
                    self.inner.update(coupe::ui::Msg::KeyBackspace);
                }
                KeyCode::Tab => {
                    self.inner.update(coupe::ui::Msg::KeyTab);
                }
                KeyCode::Esc => {
                    // Quit immediately unless the overlay or a notice consumes the Esc
                    if !self.inner.detail_open && self.inner.notice.is_none() {
                        return Some(bubbletea_rs::quit());
                    }
                    self.inner.update(coupe::ui::Msg::KeyEsc);
                }
                KeyCode::Up => {
                    self.inner.update(coupe::ui::Msg::KeyUp);
                }
                KeyCode::Down => {
                    self.inner.update(coupe::ui::Msg::KeyDown);
                }
                KeyCode::Right => {
                    self.inner.update(coupe::ui::Msg::KeyRight);
                }
                KeyCode::Char(ch) => {
                    if km.modifiers.contains(KeyModifiers::CONTROL) {
                        match ch {
                            'n' | 'N' => {
                                self.inner.update(coupe::ui::Msg::KeyDown);
                            }
                            'p' | 'P' => {
                                self.inner.update(coupe::ui::Msg::KeyUp);
                            }
                            'c' | 'C' => {
                                return Some(bubbletea_rs::quit());
                            }
                            _ => {}
                        }
                    } else if *ch == '\u{03}' {
                        // Ctrl-C delivered as ETX
                        return Some(bubbletea_rs::quit());
                    } else {
                        self.inner.update(coupe::ui::Msg::Rune(*ch));
                    }
                }
                _ => { /* ignore other keys */ }
            }

            return None;
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            self.inner.update(coupe::ui::Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
            return None;
        }
        None
    }

    fn view(&self) -> String {
        // delegate to UiModel's styled renderer
        self.inner.render_full()
    }
}

fn print_help() {
    println!("coupe - terminal search client for a cocktail recipe service");
    println!();
    println!("Usage:");
    println!("  coupe [options] [<query>...]");
    println!();
    println!("Options:");
    println!("  --endpoint <url>  Search endpoint to POST to (default: {}).", api::DEFAULT_ENDPOINT);
    println!("                    Also read from $COUPE_ENDPOINT.");
    println!("  --type <mode>     Search mode: name, ingredient or category (default: name).");
    println!("  --help            Show this help message.");
    println!();
    println!("Description:");
    println!("  With a query on the command line, performs a single search and prints the");
    println!("  matches to stdout. Without one, opens the interactive TUI: type a query,");
    println!("  Tab cycles the search mode, Enter searches, Up/Down select a card, Right");
    println!("  opens the recipe overlay, Esc closes it or quits.");
}

struct CliArgs {
    endpoint: String,
    mode: SearchMode,
    query: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        endpoint: endpoint_from_env(),
        mode: SearchMode::Name,
        query: vec![],
    };
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--endpoint" | "-e" => {
                let val = args
                    .get(i + 1)
                    .ok_or_else(|| "--endpoint requires a URL".to_string())?;
                parsed.endpoint = val.clone();
                i += 2;
            }
            "--type" | "-t" => {
                let val = args
                    .get(i + 1)
                    .ok_or_else(|| "--type requires a mode".to_string())?;
                parsed.mode = SearchMode::parse(val)
                    .ok_or_else(|| format!("unknown search type '{val}' (expected name, ingredient or category)"))?;
                i += 2;
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option '{other}'"));
            }
            _ => {
                parsed.query.push(args[i].clone());
                i += 1;
            }
        }
    }
    Ok(parsed)
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    let cli = match parse_args(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    // Query words present: one-shot search, plain output
    if !cli.query.is_empty() {
        let query = cli.query.join(" ");
        match run_once(&cli.endpoint, cli.mode, &query).await {
            Ok(out) => {
                println!("{out}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("{e}");
                process::exit(2);
            }
        }
    }

    // Interactive TUI; init() reads the endpoint from the environment
    env::set_var("COUPE_ENDPOINT", &cli.endpoint);
    let builder = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true);
    let program = match builder.build() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("failed to build program: {e:?}");
            process::exit(2);
        }
    };
    match program.run().await {
        Ok(_final_model) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!("program error: {e:?}");
            process::exit(2);
        }
    }
}
