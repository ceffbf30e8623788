//! Interactive browsing session.
//!
//! One `Storefront` lives for the whole loop, so the cart and the document
//! head carry over between commands the way they do between page views.

use anyhow::Result;
use dialoguer::Input;
use shop_commerce::ProductId;
use shop_storefront::{CheckoutForm, CheckoutOutcome, Storefront};

use super::{visit, SessionArgs};
use crate::context::Context;
use crate::output::status_badge;

const HELP: &str = "\
goto <path>        render a route (/, /products, /products/<id>, /cart, /checkout)
add <id>           add one unit of a product to the cart
remove <id>        remove a product from the cart
qty <id> <n>       set a quantity; 0 or less removes the line
clear              empty the cart
cart               show the cart
checkout           fill in the payment form and submit
probe              call the payment API directly
head               print the document head
help               show this help
quit               end the session";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Goto(String),
    Add(ProductId),
    Remove(ProductId),
    Quantity(ProductId, i64),
    Clear,
    Cart,
    Checkout,
    Probe,
    Head,
    Help,
    Quit,
    Empty,
}

impl SessionCommand {
    /// Parse one input line.
    pub fn parse(line: &str) -> Result<Self, String> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        let command = match parts.as_slice() {
            [] => SessionCommand::Empty,
            ["goto" | "open", path] => SessionCommand::Goto(path.to_string()),
            ["add", id] => SessionCommand::Add(ProductId::new(*id)),
            ["remove" | "rm", id] => SessionCommand::Remove(ProductId::new(*id)),
            ["qty", id, quantity] => {
                let quantity = quantity
                    .parse()
                    .map_err(|_| format!("Invalid quantity: {}", quantity))?;
                SessionCommand::Quantity(ProductId::new(*id), quantity)
            }
            ["clear"] => SessionCommand::Clear,
            ["cart"] => SessionCommand::Cart,
            ["checkout"] => SessionCommand::Checkout,
            ["probe"] => SessionCommand::Probe,
            ["head"] => SessionCommand::Head,
            ["help" | "?"] => SessionCommand::Help,
            ["quit" | "exit" | "q"] => SessionCommand::Quit,
            [other, ..] => return Err(format!("Unknown command: {} (try `help`)", other)),
        };

        Ok(command)
    }
}

/// Run the session command.
pub async fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let shop = Storefront::http(ctx.config.clone());

    ctx.output.header(&format!("{} session", ctx.config.site.name));
    ctx.output.info("Type `help` for commands.");
    show_page(&shop, &args.start, ctx).await;

    loop {
        let prompt = format!("shop [cart: {}]", shop.cart_badge());
        let line = match Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            Err(e) => {
                tracing::debug!(error = %e, "input closed");
                break;
            }
        };

        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                ctx.output.warn(&message);
                continue;
            }
        };

        match command {
            SessionCommand::Empty => {}
            SessionCommand::Quit => break,
            SessionCommand::Help => ctx.output.block(HELP),
            SessionCommand::Goto(path) => show_page(&shop, &path, ctx).await,
            SessionCommand::Add(id) => match shop.add_to_cart(&id).await {
                Ok(product) => ctx.output.success(&format!("Added {} to the cart", product.name)),
                Err(e) => ctx.output.error(&e.to_string()),
            },
            SessionCommand::Remove(id) => {
                shop.cart().remove_from_cart(&id);
                show_cart(&shop, ctx);
            }
            SessionCommand::Quantity(id, quantity) => {
                shop.cart().update_quantity(&id, quantity);
                show_cart(&shop, ctx);
            }
            SessionCommand::Clear => {
                shop.cart().clear_cart();
                ctx.output.success("Cart cleared");
            }
            SessionCommand::Cart => show_cart(&shop, ctx),
            SessionCommand::Checkout => checkout(&shop, ctx).await?,
            SessionCommand::Probe => {
                let report = shop.probe().await;
                ctx.output.block(&report.message);
            }
            SessionCommand::Head => ctx.output.block(&shop.document().render_head()),
        }
    }

    ctx.output.info("Session ended; the cart is gone.");
    Ok(())
}

async fn show_page(shop: &Storefront, path: &str, ctx: &Context) {
    let page = visit(shop, path, ctx).await;
    if ctx.output.is_verbose() {
        ctx.output.block(&page.html);
    }
    ctx.output.info(&format!(
        "{} {} ({})",
        page.route,
        status_badge(&page.status),
        shop.document().title()
    ));
}

fn show_cart(shop: &Storefront, ctx: &Context) {
    let cart = shop.cart().snapshot();
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }

    for line in cart.lines() {
        ctx.output.list_item(&format!(
            "{} [{}] x {} = {}",
            line.product.name,
            line.product.id,
            line.quantity,
            line.total()
        ));
    }
    ctx.output.kv("Total", &cart.total_price().display());
}

async fn checkout(shop: &Storefront, ctx: &Context) -> Result<()> {
    if shop.cart().is_empty() {
        ctx.output.info("Your cart is empty. Add some items first!");
        return Ok(());
    }

    ctx.output.warn("Don't enter real card info! Everything entered here ends up in the logs.");
    let form = CheckoutForm {
        email: prompt("Email")?,
        card_number: prompt("Card Number")?,
        expiry: prompt("Expiry (MM/YY)")?,
        cvc: prompt("CVC")?,
    };

    let outcome = shop.checkout(&form).await;
    let notice = outcome.notice();
    match (&outcome, notice) {
        (CheckoutOutcome::OrderCreated { .. }, Some(notice)) => ctx.output.success(&notice),
        (_, Some(notice)) => ctx.output.error(&notice),
        (_, None) => ctx.output.info("Your cart is empty. Add some items first!"),
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(SessionCommand::parse("").unwrap(), SessionCommand::Empty);
        assert_eq!(
            SessionCommand::parse("goto /products/1").unwrap(),
            SessionCommand::Goto("/products/1".to_string())
        );
        assert_eq!(
            SessionCommand::parse("  add   7 ").unwrap(),
            SessionCommand::Add(ProductId::new("7"))
        );
        assert_eq!(
            SessionCommand::parse("qty 7 -1").unwrap(),
            SessionCommand::Quantity(ProductId::new("7"), -1)
        );
        assert_eq!(SessionCommand::parse("exit").unwrap(), SessionCommand::Quit);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(SessionCommand::parse("qty 7 lots").is_err());
        assert!(SessionCommand::parse("dance").is_err());
        assert!(SessionCommand::parse("add").is_err());
    }
}
