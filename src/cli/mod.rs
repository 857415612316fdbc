use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web form (runs until interrupted)
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8501")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Generate JavaScript for a single query and print it
    Generate {
        query: String,

        /// Print an uncoloured fenced block even on a terminal
        #[arg(long)]
        plain: bool,
    },
}
