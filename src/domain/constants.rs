// ============================================================================
// CORDIC Constants
// Decimal literals for arctangents, gain compensation and reference angles
// ============================================================================

/// Number of arctangent entries supplied as literals. Later entries are
/// derived by halving, since atan(x) ~ x for small x.
pub const LITERAL_ANGLES: usize = 24;

/// Stage count of the reference configuration
pub const REFERENCE_STAGES: usize = 75;

/// atan(2^-k) in radians for k = 0..24
pub const ATAN_LITERALS: [&str; LITERAL_ANGLES] = [
    "0.78539816339744830961566084581987572104929234984377",
    "0.46364760900080611621425623146121440202853705428612",
    "0.24497866312686415417208248121127581091414409838118",
    "0.12435499454676143503135484916387102557317019176980",
    "0.06241880999595734847397911298550511360627388779749",
    "0.03123983343026827625371174489249097703249566372540",
    "0.01562372862047683080280152125657031891111413980090",
    "0.00781234106010111129646339184219928162122281172501",
    "0.00390623013196697182762866531142438714035749011520",
    "0.00195312251647881868512148262507671393161074677723",
    "0.00097656218955931943040343019971729085163419701581",
    "0.00048828121119489827546923962564484866619236113313",
    "0.00024414062014936176401672294325965998621241779097",
    "0.00012207031189367020423905864611795630093082940901",
    "0.00006103515617420877502166256917382915378514353683",
    "0.00003051757811552609686182595343853601975094967511",
    "0.00001525878906131576210723193581269788513742923814",
    "0.00000762939453110197026338848234010509058635074391",
    "0.00000381469726560649628292307561637299372280525730",
    "0.00000190734863281018703536536930591724416871434216",
    "0.00000095367431640596087942067068992311239001963412",
    "0.00000047683715820308885992758382144924707587049404",
    "0.00000023841857910155798249094797721893269783096898",
    "0.00000011920928955078068531136849713792211264596758",
];

/// Reciprocal of the CORDIC gain, prod cos(atan(2^-k)). Pre-scales the
/// starting vector so the rotated vector ends up with unit length.
pub const INVERSE_GAIN: &str = "0.60725293500888125616944675250492826311239085215007";

/// pi / 2, the exclusive upper bound of the convergent angle range
pub const HALF_PI: &str = "1.57079632679489661923132169163975144209858469968755";

/// 30 degrees in radians
pub const ANGLE_30_DEGREES: &str = "0.52359877559829887307710723054658381403286156656251";

/// 45 degrees in radians
pub const ANGLE_45_DEGREES: &str = "0.78539816339744830961566084581987572104929234984345";
