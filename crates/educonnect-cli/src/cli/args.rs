use clap::{Parser, Subcommand, ValueEnum};
use educonnect::model::ResourceKind;
use educonnect::prefs::Theme;

#[derive(Parser, Debug)]
#[command(name = "educonnect")]
#[command(about = "Academic community from the terminal: resources, tutors, and forum", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Output::Text)]
    pub output: Output,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

/// Resolve a resource type from user input, accent-insensitively
/// ("guia" and "Guía" both work).
pub fn parse_kind(s: &str) -> Result<ResourceKind, String> {
    let lowered = s.to_lowercase();
    let key = match lowered.as_str() {
        "guia" => "guía",
        "presentacion" => "presentación",
        other => other,
    };
    ResourceKind::ALL
        .iter()
        .find(|k| k.as_str().to_lowercase() == key)
        .copied()
        .ok_or_else(|| format!("unknown resource type: {}", s))
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the resource catalog
    #[command(alias = "r")]
    Resources {
        /// Full query string, as shown in a listing footer
        /// (e.g. "materia=Cálculo I&orden=rating&pagina=2")
        #[arg(short, long, default_value = "")]
        query: String,

        /// Search term
        #[arg(short, long)]
        search: Option<String>,

        /// Sort key: fecha, rating, descargas, likes
        #[arg(long)]
        orden: Option<String>,

        /// University code filter (e.g. UTP)
        #[arg(long)]
        universidad: Option<String>,

        /// Career filter
        #[arg(long)]
        carrera: Option<String>,

        /// Subject filter
        #[arg(long)]
        materia: Option<String>,

        /// Resource type filter (PDF, Guía, Apuntes, ...)
        #[arg(long)]
        tipo: Option<String>,

        /// Page number (1-based)
        #[arg(short, long)]
        pagina: Option<usize>,
    },

    /// Browse the tutor directory
    #[command(alias = "t")]
    Tutors {
        /// Full query string (e.g. "subject=Cálculo I&minRating=4.5")
        #[arg(short, long, default_value = "")]
        query: String,

        /// Search term
        #[arg(short, long)]
        search: Option<String>,

        /// Subject the tutor must offer
        #[arg(long)]
        subject: Option<String>,

        /// University filter
        #[arg(long)]
        university: Option<String>,

        /// Minimum hourly price
        #[arg(long)]
        min_price: Option<String>,

        /// Maximum hourly price
        #[arg(long)]
        max_price: Option<String>,

        /// Minimum rating (0-5)
        #[arg(long)]
        min_rating: Option<String>,

        /// Modality: Presencial or Virtual
        #[arg(long)]
        modality: Option<String>,
    },

    /// Send a contact request to a tutor
    Contact {
        /// Tutor id (shown in the tutor listing)
        tutor_id: u64,

        /// Your name
        #[arg(long, default_value = "")]
        name: String,

        /// Your email
        #[arg(long, default_value = "")]
        email: String,

        /// Subject you need help with (one the tutor offers)
        #[arg(long, default_value = "")]
        subject: String,

        /// Preferred date (free-form)
        #[arg(long)]
        date: Option<String>,

        /// Preferred time (free-form)
        #[arg(long)]
        time: Option<String>,

        /// Message to the tutor (20-500 characters)
        #[arg(short, long, default_value = "")]
        message: String,
    },

    /// Browse the community forum
    #[command(alias = "f")]
    Forum {
        /// Full query string (e.g. "categoria=1&orden=popular")
        #[arg(short, long, default_value = "")]
        query: String,

        /// Search term
        #[arg(short, long)]
        search: Option<String>,

        /// Category id filter
        #[arg(long)]
        categoria: Option<u64>,

        /// Sort key: recent, popular, unanswered
        #[arg(long)]
        orden: Option<String>,
    },

    /// View a forum post with its replies
    Post {
        /// Post id
        id: u64,
    },

    /// Create a forum post
    NewPost {
        /// Post title (at least 10 characters)
        #[arg(long, default_value = "")]
        title: String,

        /// Category id
        #[arg(long)]
        category: Option<u64>,

        /// Post content (at least 20 characters)
        #[arg(long, default_value = "")]
        content: String,

        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,

        /// Related subject
        #[arg(long, default_value = "")]
        materia: String,

        /// Your university code
        #[arg(long, default_value = "")]
        universidad: String,

        /// Your career
        #[arg(long, default_value = "")]
        carrera: String,
    },

    /// Like (or unlike) a forum post
    Like {
        /// Post id
        id: u64,
    },

    /// Share a study resource
    Upload {
        /// Resource title
        #[arg(long, default_value = "")]
        title: String,

        /// Resource type
        #[arg(long, value_parser = parse_kind, default_value = "PDF")]
        tipo: ResourceKind,

        /// Short description
        #[arg(long, default_value = "")]
        description: String,

        /// Subject
        #[arg(long, default_value = "")]
        materia: String,

        /// University code
        #[arg(long, default_value = "")]
        universidad: String,
    },

    /// Sign in (simulated)
    Login {
        /// Account email
        #[arg(long, default_value = "")]
        email: String,

        /// Account password
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Create an account (simulated)
    Register {
        /// Full name
        #[arg(long, default_value = "")]
        name: String,

        /// Account email
        #[arg(long, default_value = "")]
        email: String,

        /// Password (at least 6 characters)
        #[arg(long, default_value = "")]
        password: String,

        /// Password confirmation
        #[arg(long, default_value = "")]
        confirm: String,
    },

    /// Compare the available plans
    Pricing,

    /// Activate the Pro plan (simulated payment)
    Upgrade,

    /// Show or change preferences
    Prefs {
        /// Set the color theme
        #[arg(long, value_enum)]
        theme: Option<ThemeArg>,
    },
}
