//! # Interactive Shell
//!
//! Drives a storefront from text commands, one per line.
//!
//! ```text
//! > add shield-001          UiEvent::AddToCart(catalog attrs)
//! > cart                    UiEvent::CartLink
//! > checkout                UiEvent::Checkout
//! > shop-more               UiEvent::ShopMore
//! > home                    UiEvent::HomeLink
//! > products                list the catalog
//! > datalayer               dump the in-memory data layer
//! > help / quit
//! ```
//!
//! Between commands the shell sleeps until the notification's next
//! deadline, so the toast fades and hides on its own while the user types.

use std::io::Write;

use storefront_core::ViewId;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tracing::debug;

use crate::commands::{dispatch, navigation, Outcome, UiEvent};
use crate::error::{AppError, AppResult};
use crate::state::{Element, NotificationPhase, Page, SharedDataLayer, StoreConfig, Storefront};

pub const HELP: &str = "\
commands:
  home              go to the home page
  cart              go to the cart page
  add <product-id>  add one unit of a product
  checkout          buy everything in the cart
  shop-more         continue shopping after checkout
  products          list the catalog
  datalayer         show the data-layer records
  help              this text
  quit              leave";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Ui(UiEvent),
    Products,
    DataLayer,
    Help,
    Quit,
}

/// Parses one line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str, config: &StoreConfig) -> AppResult<Option<ShellCommand>> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };

    let command = match (word, words.next()) {
        ("home", None) => ShellCommand::Ui(UiEvent::HomeLink),
        ("cart", None) => ShellCommand::Ui(UiEvent::CartLink),
        ("checkout", None) => ShellCommand::Ui(UiEvent::Checkout),
        ("shop-more", None) => ShellCommand::Ui(UiEvent::ShopMore),
        ("add", Some(id)) => {
            let entry = config
                .catalog_entry(id)
                .ok_or_else(|| AppError::UnknownProduct(id.to_string()))?;
            ShellCommand::Ui(UiEvent::AddToCart(entry.attributes()))
        }
        ("products", None) => ShellCommand::Products,
        ("datalayer", None) => ShellCommand::DataLayer,
        ("help", None) => ShellCommand::Help,
        ("quit" | "exit", None) => ShellCommand::Quit,
        _ => return Err(AppError::UnknownCommand(line.trim().to_string())),
    };

    Ok(Some(command))
}

pub struct Shell {
    store: Storefront<Page>,
    data_layer: Option<SharedDataLayer>,
}

impl Shell {
    /// Takes over a fresh session and pushes the initial page view.
    ///
    /// `data_layer` is the inspectable handle when the session's sink is an
    /// in-memory [`SharedDataLayer`].
    pub fn start(mut store: Storefront<Page>, data_layer: Option<SharedDataLayer>) -> Self {
        navigation::start(&mut store);
        Shell { store, data_layer }
    }

    pub fn store(&self) -> &Storefront<Page> {
        &self.store
    }

    /// Reads commands until EOF or `quit`.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        write_page(out, &self.store)?;

        loop {
            let next = match self.store.notification_deadline() {
                Some(deadline) => {
                    tokio::select! {
                        line = lines.next_line() => line?,
                        _ = tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)) => {
                            self.report_notification(out)?;
                            continue;
                        }
                    }
                }
                None => lines.next_line().await?,
            };

            let Some(line) = next else {
                debug!("Input closed");
                break;
            };

            self.report_notification(out)?;

            match parse_line(&line, self.store.config()) {
                Ok(None) => {}
                Ok(Some(ShellCommand::Quit)) => break,
                Ok(Some(command)) => self.execute(command, out)?,
                Err(err) => writeln!(out, "error: {}", err)?,
            }
        }

        Ok(())
    }

    fn execute<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> AppResult<()> {
        match command {
            ShellCommand::Ui(event) => {
                let outcome = dispatch(&mut self.store, event);
                write_outcome(out, &outcome, self.store.config())?;
                write_page(out, &self.store)?;
            }
            ShellCommand::Products => write_products(out, self.store.config())?,
            ShellCommand::DataLayer => match &self.data_layer {
                Some(data_layer) => {
                    for record in data_layer.records() {
                        writeln!(out, "{}", record)?;
                    }
                }
                None if self.store.config().data_layer_enabled => {
                    writeln!(out, "(data layer is written to a file)")?
                }
                None => writeln!(out, "(no data layer)")?,
            },
            ShellCommand::Help => writeln!(out, "{}", HELP)?,
            ShellCommand::Quit => {}
        }
        Ok(())
    }

    fn report_notification<W: Write>(&mut self, out: &mut W) -> AppResult<()> {
        if let Some(phase) = self.store.tick() {
            writeln!(out, "[notification {}]", phase)?;
        }
        Ok(())
    }
}

fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome, config: &StoreConfig) -> AppResult<()> {
    match outcome {
        Outcome::Added(line) => writeln!(
            out,
            "+1 {} (now x{}, {})",
            line.name,
            line.quantity,
            line.line_total().format_with(&config.currency_symbol)
        )?,
        Outcome::CheckedOut(receipt) => writeln!(
            out,
            "order {} placed: {}",
            receipt.transaction_id,
            receipt.value.format_with(&config.currency_symbol)
        )?,
        Outcome::Navigated(None) => writeln!(out, "(no such page)")?,
        Outcome::Navigated(Some(_)) => {}
    }
    Ok(())
}

fn write_products<W: Write>(out: &mut W, config: &StoreConfig) -> AppResult<()> {
    for product in config.products()? {
        writeln!(
            out,
            "  {:<16} {:<24} {}",
            product.id,
            product.name,
            product.price.format_with(&config.currency_symbol)
        )?;
    }
    Ok(())
}

/// Prints what a visitor would currently see.
fn write_page<W: Write>(out: &mut W, store: &Storefront<Page>) -> AppResult<()> {
    let page = store.page();
    let badge = page.text(Element::CartCount).unwrap_or("0");
    writeln!(out, "== {} ==  [cart: {}]", page.title(), badge)?;

    match page.visible_view() {
        Some(ViewId::Home) => write_products(out, store.config())?,
        Some(ViewId::Cart) => {
            if page.is_visible(Element::EmptyCartMessage) {
                writeln!(out, "  Your cart is empty.")?;
            }
            for row in page.rows(Element::CartItems) {
                writeln!(out, "  {:<40} {}", row.label, row.amount)?;
            }
            if page.is_visible(Element::CartSummary) {
                let total = page.text(Element::CartTotal).unwrap_or_default();
                writeln!(out, "  {:<40} {}", "Total", total)?;
            }
        }
        Some(ViewId::ThankYou) => {
            let order_id = page.text(Element::OrderId).unwrap_or_default();
            writeln!(out, "  Thank you! Order {}", order_id)?;
        }
        None => writeln!(out, "  (blank page)")?,
    }

    if store.notification_phase() != NotificationPhase::Hidden {
        writeln!(out, "  [+1 added to cart]")?;
    }
    Ok(())
}
