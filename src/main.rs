//! Kedai shell
//!
//! The storefront page's click handlers re-expressed as an interactive
//! terminal session. Auth state persists to a JSON session file standing in
//! for browser local storage; the cart lives only for the current run.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use tabled::{builder::Builder, settings::Style};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use kedai::{
    catalog::{Catalog, CatalogError},
    money::format_rupiah,
    notify,
    storage::{FileStorage, StorageError},
    storefront::Storefront,
    view::CartViewModel,
};

/// Kedai Kopi storefront shell configuration
#[derive(Debug, Parser)]
#[command(name = "kedai", about = "Kedai Kopi storefront shell", long_about = None)]
struct ShellConfig {
    /// Durable session store path (stands in for browser local storage).
    #[clap(long, default_value = "kedai-session.json")]
    session: PathBuf,

    /// Log filter used when RUST_LOG is not set.
    #[clap(long, default_value = "info")]
    log_level: String,
}

/// Errors that end the shell.
#[derive(Debug, Error)]
enum ShellError {
    #[error("terminal I/O error")]
    Io(#[from] io::Error),

    #[error("session store error")]
    Storage(#[from] StorageError),

    #[error("menu fixture error")]
    Menu(#[from] CatalogError),

    #[error("logging initialisation error")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

const HELP: &str = "\
Perintah:
  menu                daftar produk
  add <nama produk>   tambah ke keranjang
  remove <nomor>      hapus baris keranjang
  cart                tampilkan keranjang
  checkout            lanjut ke pembayaran
  register            buat akun
  login               masuk
  forgot              minta OTP reset password
  reset               reset password dengan OTP
  quit                keluar";

fn main() -> Result<(), ShellError> {
    let config = ShellConfig::parse();

    init_logging(&config)?;

    let catalog = Catalog::menu()?;
    let storage = FileStorage::open(&config.session)?;
    let mut shop = Storefront::new(catalog, storage);

    let stdin = io::stdin();
    let stdout = io::stdout();

    run(&mut shop, &mut stdin.lock(), &mut stdout.lock())
}

fn init_logging(config: &ShellConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().compact().with_target(false))
        .with(filter)
        .try_init()
}

fn run(
    shop: &mut Storefront<FileStorage>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), ShellError> {
    writeln!(out, "Kedai Kopi. Ketik 'help' untuk daftar perintah.")?;

    loop {
        write!(out, "kedai> ")?;
        out.flush()?;

        let mut line = String::new();

        if input.read_line(&mut line)? == 0 {
            break;
        }

        let trimmed = line.trim();

        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };

        match command {
            "" => {}
            "help" => writeln!(out, "{HELP}")?,
            "menu" => writeln!(out, "{}", menu_table(shop.catalog()))?,
            "add" => add(shop, out, rest)?,
            "remove" => remove(shop, out, rest)?,
            "cart" => cart(shop, out)?,
            "checkout" => {
                if let Err(error) = shop.checkout() {
                    writeln!(out, "{}", notify::alert_for(&error))?;
                }
            }
            "register" => register(shop, input, out)?,
            "login" => login(shop, input, out)?,
            "forgot" => forgot(shop, input, out)?,
            "reset" => reset(shop, input, out)?,
            "quit" | "exit" => break,
            other => writeln!(out, "Perintah '{other}' tidak dikenal. Ketik 'help'.")?,
        }
    }

    Ok(())
}

fn add(
    shop: &mut Storefront<FileStorage>,
    out: &mut impl Write,
    name: &str,
) -> Result<(), ShellError> {
    if name.is_empty() {
        writeln!(out, "Pakai: add <nama produk>")?;
        return Ok(());
    }

    match shop.add_to_cart(name) {
        Ok(toast) => writeln!(out, "{}", toast.message)?,
        Err(error) => writeln!(out, "{}", notify::alert_for(&error))?,
    }

    Ok(())
}

fn remove(
    shop: &mut Storefront<FileStorage>,
    out: &mut impl Write,
    raw_index: &str,
) -> Result<(), ShellError> {
    let Ok(index) = raw_index.parse::<usize>() else {
        writeln!(out, "Pakai: remove <nomor baris>")?;
        return Ok(());
    };

    match shop.remove_from_cart(index) {
        Ok(toast) => writeln!(out, "{}", toast.message)?,
        Err(error) => writeln!(out, "{}", notify::alert_for(&error))?,
    }

    Ok(())
}

fn cart(shop: &Storefront<FileStorage>, out: &mut impl Write) -> Result<(), ShellError> {
    match shop.open_cart() {
        Ok(view) => {
            if let Some(placeholder) = view.placeholder {
                writeln!(out, "{placeholder}")?;
            } else {
                writeln!(out, "{}", cart_table(&view))?;
            }

            writeln!(out, "Item di keranjang: {}", view.item_count)?;
        }
        Err(error) => writeln!(out, "{}", notify::alert_for(&error))?,
    }

    Ok(())
}

fn register(
    shop: &mut Storefront<FileStorage>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), ShellError> {
    shop.show_register();

    let name = prompt(input, out, "Nama")?;
    let email = prompt(input, out, "Email")?;
    let password = prompt(input, out, "Password")?;

    match shop.register(&name, &email, &password) {
        Ok(()) => writeln!(out, "{}", notify::REGISTER_OK)?,
        Err(error) => writeln!(out, "{}", notify::alert_for(&error))?,
    }

    Ok(())
}

fn login(
    shop: &mut Storefront<FileStorage>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), ShellError> {
    shop.open_auth();

    let email = prompt(input, out, "Email")?;
    let password = prompt(input, out, "Password")?;

    match shop.login(&email, &password) {
        Ok(()) => writeln!(out, "{}", notify::LOGIN_OK)?,
        Err(error) => writeln!(out, "{}", notify::alert_for(&error))?,
    }

    Ok(())
}

fn forgot(
    shop: &mut Storefront<FileStorage>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), ShellError> {
    shop.show_forgot();

    let email = prompt(input, out, "Email")?;

    match shop.request_otp(&email) {
        Ok(issued) => {
            for message in notify::otp_reveal(&issued.code) {
                writeln!(out, "{message}")?;
            }
        }
        Err(error) => writeln!(out, "{}", notify::alert_for(&error))?,
    }

    Ok(())
}

fn reset(
    shop: &mut Storefront<FileStorage>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), ShellError> {
    let otp = prompt(input, out, "OTP")?;
    let password = prompt(input, out, "Password baru")?;

    match shop.reset_password(&otp, &password) {
        Ok(()) => writeln!(out, "{}", notify::RESET_OK)?,
        Err(error) => writeln!(out, "{}", notify::alert_for(&error))?,
    }

    Ok(())
}

fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> Result<String, ShellError> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn menu_table(catalog: &Catalog) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Harga"]);

    for product in catalog.products() {
        builder.push_record([product.name.clone(), format_rupiah(&product.price)]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    table.to_string()
}

fn cart_table(view: &CartViewModel) -> String {
    let mut builder = Builder::default();

    builder.push_record(["#", "Item", "Jumlah", "Subtotal"]);

    for line in &view.lines {
        builder.push_record([
            line.index.to_string(),
            line.name.clone(),
            format!("×{}", line.quantity),
            line.line_total.clone(),
        ]);
    }

    if let Some(total) = &view.total {
        builder.push_record([String::new(), "Total".to_owned(), String::new(), total.clone()]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    table.to_string()
}
