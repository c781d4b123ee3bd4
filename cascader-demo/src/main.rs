//! Interactive region picker.
//!
//! Usage: `cascader-demo [DATA.json] [VALUE]`
//!
//! `VALUE` is a `/`-separated list of option values, e.g. `440000/440300`.
//! The chosen path is printed as JSON when a leaf is picked.

mod paths;

use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;
use std::time::{Duration, Instant};

use cascader::option::parse_tree;
use cascader::{
    Event, Key, Modifiers, OptionList, OptionNode, PathEntry, Picker, PickerConfig, PickerProps,
    Result, SelectionPath, Terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Frame interval while a page scroll is animating.
const FRAME: Duration = Duration::from_millis(16);

fn main() {
    paths::rotate_logs();
    if let Ok(log_file) = File::create(paths::log_file()) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    match run() {
        Ok(Some(path)) => match serde_json::to_string(&path) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: {}", e),
        },
        Ok(None) => {}
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<Option<SelectionPath>> {
    let mut args = std::env::args().skip(1);

    let data = match args.next() {
        Some(path) => parse_tree(&std::fs::read_to_string(path)?)?,
        None => cascader::dataset::regions()?,
    };
    let value = args
        .next()
        .map(|tokens| value_from_tokens(&data, &tokens))
        .unwrap_or_default();

    let config = match paths::config_file() {
        Some(path) => PickerConfig::load_or_default(path)?,
        None => PickerConfig::default(),
    };

    let checked: Rc<RefCell<Option<SelectionPath>>> = Rc::default();
    let sink = checked.clone();
    let props = PickerProps::new(data)
        .value(value)
        .config(config)
        .on_check(move |path| {
            log::info!("checked {:?}", path);
            *sink.borrow_mut() = Some(path.to_vec());
        });
    let mut picker = Picker::new(props);

    let mut term = Terminal::new()?;
    let mut redraw = true;

    loop {
        let now = Instant::now();
        redraw |= picker.tick(now);

        if redraw || picker.take_dirty() {
            term.draw(|area, buf| {
                picker.layout(area);
                picker.render(buf);
            })?;
            picker.take_dirty();
            redraw = false;
        }

        if checked.borrow().is_some() && !picker.is_animating() {
            break;
        }

        let timeout = if picker.is_animating() {
            FRAME
        } else {
            Duration::from_secs(1)
        };
        for event in term.poll(timeout)? {
            if is_quit(&event) {
                return Ok(None);
            }
            if let Event::Resize { .. } = event {
                redraw = true;
            }
            picker.handle_event(&event, Instant::now());
        }
    }

    drop(term);
    Ok(checked.take())
}

fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key {
            key: Key::Char('q') | Key::Escape,
            ..
        } => true,
        Event::Key {
            key: Key::Char('c'),
            modifiers,
        } => *modifiers == Modifiers::ctrl(),
        _ => false,
    }
}

/// Build a value from `/`-separated option values, looking labels up in the
/// tree. Unknown tokens keep their value as label so the picker can report
/// the mismatch.
fn value_from_tokens(data: &OptionList, tokens: &str) -> SelectionPath {
    let mut options: Option<&[OptionNode]> = Some(&data[..]);
    tokens
        .split('/')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let node = options.and_then(|opts| opts.iter().find(|node| node.value == token));
            options = node.and_then(|node| node.children.as_deref());
            match node {
                Some(node) => node.entry(),
                None => PathEntry::new(token, token),
            }
        })
        .collect()
}
