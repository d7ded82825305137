// UI layer: a numbered text menu built on `dialoguer` prompts, with
// `crossterm` for clearing the screen and coloring the status column.
// Each screen runs to completion and the loop redraws the menu.

use crate::error::RegistryError;
use crate::model::Restaurant;
use crate::registry::Registry;
use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::stdout;
use std::time::Duration;

const BANNER: &str = r#"
  ____           _                              _
 |  _ \ ___  ___| |_ __ _ _   _ _ __ __ _ _ __ | |_ ___
 | |_) / _ \/ __| __/ _` | | | | '__/ _` | '_ \| __/ __|
 |  _ <  __/\__ \ || (_| | |_| | | | (_| | | | | |_\__ \
 |_| \_\___||___/\__\__,_|\__,_|_|  \__,_|_| |_|\__|___/
"#;

const NAME_WIDTH: usize = 22;
const CATEGORY_WIDTH: usize = 20;
const TABLE_WIDTH: usize = 60;

/// Entries of the main menu, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Register,
    List,
    Toggle,
    Exit,
}

impl MenuOption {
    /// Parse what the user typed at the menu prompt. Surrounding
    /// whitespace and a leading sign are accepted; anything that is not
    /// one of the four numbers gives `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(MenuOption::Register),
            2 => Some(MenuOption::List),
            3 => Some(MenuOption::Toggle),
            4 => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

/// Main interactive menu. Owns the registry and loops until the user
/// picks "Exit".
pub fn main_menu(mut registry: Registry) -> Result<()> {
    loop {
        clear_screen()?;
        println!("{}", BANNER);
        print_options();

        let choice: String = Input::new()
            .with_prompt("Choose an option")
            .allow_empty(true)
            .interact_text()?;

        match MenuOption::parse(&choice) {
            Some(MenuOption::Register) => handle_register(&mut registry)?,
            Some(MenuOption::List) => handle_list(&registry),
            Some(MenuOption::Toggle) => handle_toggle(&mut registry)?,
            Some(MenuOption::Exit) => {
                print_subtitle("Closing app");
                break;
            }
            None => println!("Invalid option!\n"),
        }
        back_to_main_menu()?;
    }
    Ok(())
}

fn clear_screen() -> Result<()> {
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

fn print_options() {
    println!("1. Register new restaurant");
    println!("2. List restaurants");
    println!("3. Toggle restaurant status");
    println!("4. Exit\n");
}

fn print_subtitle(text: &str) {
    println!("{}", text);
    println!("{}", "-".repeat(text.chars().count()));
}

fn back_to_main_menu() -> Result<()> {
    let _: String = Input::new()
        .with_prompt("\nPress [ENTER] to return to the main menu")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

/// Run `op` behind a "Saving..." spinner.
fn with_spinner<T>(op: impl FnOnce() -> T) -> Result<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Saving...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let out = op();
    spinner.finish_and_clear();
    Ok(out)
}

fn handle_register(registry: &mut Registry) -> Result<()> {
    print_subtitle("Register new restaurants");
    let name: String = Input::new()
        .with_prompt("Name of the restaurant to register")
        .allow_empty(true)
        .interact_text()?;
    let category: String = Input::new()
        .with_prompt("Category of the restaurant")
        .allow_empty(true)
        .interact_text()?;

    match with_spinner(|| registry.register(&name, &category))? {
        Ok(r) => println!("Restaurant \"{}\" was registered successfully!", r.name),
        Err(e) => println!("Could not save the restaurant: {}", e),
    }
    Ok(())
}

fn handle_list(registry: &Registry) {
    print_subtitle("Listing restaurants");
    println!("{}", format_row("Restaurant name", "Category", "Status"));
    println!("{}", "-".repeat(TABLE_WIDTH));

    let restaurants = registry.list_all();
    if restaurants.is_empty() {
        println!("No restaurants registered.");
        return;
    }
    for r in restaurants {
        let label = status_label(r.active);
        let status = if r.active { label.green() } else { label.red() };
        println!("{}", format_row(&r.name, &r.category, &status.to_string()));
    }
}

fn handle_toggle(registry: &mut Registry) -> Result<()> {
    print_subtitle("Toggling restaurant status");
    let name: String = Input::new()
        .with_prompt("Name of the restaurant to toggle")
        .allow_empty(true)
        .interact_text()?;

    match with_spinner(|| registry.toggle(&name))? {
        Ok(r) => println!("{}", toggle_message(&r)),
        Err(RegistryError::NotFound(query)) => {
            println!("Restaurant \"{}\" was not found.", query)
        }
        Err(e) => println!("Could not save the restaurant: {}", e),
    }
    Ok(())
}

fn status_label(active: bool) -> &'static str {
    if active {
        "ACTIVE"
    } else {
        "INACTIVE"
    }
}

fn toggle_message(r: &Restaurant) -> String {
    let verb = if r.active { "ACTIVATED" } else { "DEACTIVATED" };
    format!("Restaurant {} was {} successfully!", r.name, verb)
}

/// One table line, name and category left-aligned and padded by
/// character count.
fn format_row(name: &str, category: &str, status: &str) -> String {
    format!(
        "{:<nw$} | {:<cw$} | {}",
        name,
        category,
        status,
        nw = NAME_WIDTH,
        cw = CATEGORY_WIDTH
    )
}
