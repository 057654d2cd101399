//! Physicochemical inputs accepted by the prediction endpoint.

/// One numeric input of the prediction form, in submission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WineFeature {
    FixedAcidity,
    VolatileAcidity,
    CitricAcid,
    ResidualSugar,
    Chlorides,
    FreeSulfurDioxide,
    TotalSulfurDioxide,
    Density,
    Ph,
    Sulphates,
    Alcohol,
}

impl WineFeature {
    pub const ALL: [WineFeature; 11] = [
        WineFeature::FixedAcidity,
        WineFeature::VolatileAcidity,
        WineFeature::CitricAcid,
        WineFeature::ResidualSugar,
        WineFeature::Chlorides,
        WineFeature::FreeSulfurDioxide,
        WineFeature::TotalSulfurDioxide,
        WineFeature::Density,
        WineFeature::Ph,
        WineFeature::Sulphates,
        WineFeature::Alcohol,
    ];

    /// Form field name expected by the server.
    pub fn key(self) -> &'static str {
        match self {
            Self::FixedAcidity => "fixed_acidity",
            Self::VolatileAcidity => "volatile_acidity",
            Self::CitricAcid => "citric_acid",
            Self::ResidualSugar => "residual_sugar",
            Self::Chlorides => "chlorides",
            Self::FreeSulfurDioxide => "free_sulfur_dioxide",
            Self::TotalSulfurDioxide => "total_sulfur_dioxide",
            Self::Density => "density",
            Self::Ph => "pH",
            Self::Sulphates => "sulphates",
            Self::Alcohol => "alcohol",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FixedAcidity => "Fixed acidity",
            Self::VolatileAcidity => "Volatile acidity",
            Self::CitricAcid => "Citric acid",
            Self::ResidualSugar => "Residual sugar",
            Self::Chlorides => "Chlorides",
            Self::FreeSulfurDioxide => "Free sulfur dioxide",
            Self::TotalSulfurDioxide => "Total sulfur dioxide",
            Self::Density => "Density",
            Self::Ph => "pH",
            Self::Sulphates => "Sulphates",
            Self::Alcohol => "Alcohol",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Sample of a good red wine, loaded by the example shortcut.
pub const EXAMPLE_RECORD: [(WineFeature, &str); 11] = [
    (WineFeature::FixedAcidity, "7.4"),
    (WineFeature::VolatileAcidity, "0.70"),
    (WineFeature::CitricAcid, "0.00"),
    (WineFeature::ResidualSugar, "1.9"),
    (WineFeature::Chlorides, "0.076"),
    (WineFeature::FreeSulfurDioxide, "11.0"),
    (WineFeature::TotalSulfurDioxide, "34.0"),
    (WineFeature::Density, "0.9978"),
    (WineFeature::Ph, "3.51"),
    (WineFeature::Sulphates, "0.56"),
    (WineFeature::Alcohol, "9.4"),
];
