use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Shopping cart service for the cooperative storefront.")]
pub struct Cli {
    /// Delete the line items of carts that have not been touched for 30
    /// days before starting the server. Cart rows themselves are kept.
    #[arg(long, default_value_t = false)]
    pub clear_abandoned_carts: bool,
}
