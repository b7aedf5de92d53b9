use serde::{Deserialize, Serialize};

/// Primary occupation of the applicant.
///
/// Deserialises leniently: any label or slug that is not recognised maps to
/// [`Occupation::Other`], which carries the baseline feature profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Occupation {
    GigWorker,
    Farmer,
    ShopOwner,
    Salaried,
    Freelancer,
    #[default]
    Other,
}

impl Occupation {
    /// Every category, in the order the catalogue is presented.
    pub const ALL: [Occupation; 6] = [
        Occupation::GigWorker,
        Occupation::Farmer,
        Occupation::ShopOwner,
        Occupation::Salaried,
        Occupation::Freelancer,
        Occupation::Other,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Occupation::GigWorker => "Gig Worker (e.g., Delivery, Driver)",
            Occupation::Farmer => "Farmer / Agricultural Worker",
            Occupation::ShopOwner => "Small Shop Owner / Local Business",
            Occupation::Salaried => "Salaried (Formal Employment)",
            Occupation::Freelancer => "Freelancer / Consultant (Irregular Income)",
            Occupation::Other => "Other",
        }
    }

    /// Short machine-friendly identifier, also the serialised form.
    pub fn slug(&self) -> &'static str {
        match self {
            Occupation::GigWorker => "gig-worker",
            Occupation::Farmer => "farmer",
            Occupation::ShopOwner => "shop-owner",
            Occupation::Salaried => "salaried",
            Occupation::Freelancer => "freelancer",
            Occupation::Other => "other",
        }
    }

    /// Strict lookup by label or slug (case-insensitive, `_` and `-` interchangeable).
    pub fn lookup(value: &str) -> Option<Occupation> {
        let wanted = normalise(value);
        Occupation::ALL.into_iter().find(|occ| {
            normalise(occ.slug()) == wanted
                || normalise(occ.label()) == wanted
                || occ.aliases().iter().any(|a| *a == wanted)
        })
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Occupation::GigWorker => &["gig"],
            Occupation::Farmer => &["agricultural-worker"],
            Occupation::ShopOwner => &["shop", "small-business"],
            Occupation::Salaried => &["formal"],
            Occupation::Freelancer => &["consultant"],
            Occupation::Other => &[],
        }
    }
}

fn normalise(value: &str) -> String {
    value.trim().to_lowercase().replace('_', "-")
}

impl From<&str> for Occupation {
    fn from(value: &str) -> Self {
        Occupation::lookup(value).unwrap_or_else(|| {
            log::debug!("unrecognised occupation '{value}', using baseline profile");
            Occupation::Other
        })
    }
}

impl From<String> for Occupation {
    fn from(value: String) -> Self {
        Occupation::from(value.as_str())
    }
}

impl From<Occupation> for String {
    fn from(value: Occupation) -> Self {
        value.slug().to_string()
    }
}

impl std::fmt::Display for Occupation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
