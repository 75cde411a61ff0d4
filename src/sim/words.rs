//! Word catalog
//!
//! Candidate texts for falling words. Lowercase ASCII only - the input
//! resolver matches folded single letters against these.

pub const WORD_LIST: &[&str] = &[
    "star", "moon", "sun", "sky", "orbit", "mars", "earth", "pluto", "venus", "comet",
    "nebula", "galaxy", "quasar", "pulsar", "void", "abyss", "light", "dark", "alien", "ufo",
    "rocket", "launch", "space", "astro", "solar", "lunar", "dust", "ring", "hole", "dwarf",
    "giant", "cloud", "storm", "field", "force", "laser", "blast", "beam", "ship", "hull",
    "core", "warp", "drive", "pilot", "radar", "sonar", "scan", "data", "code", "link",
    "node", "grid", "mesh", "flux", "wave", "ion", "atom", "cell", "unit", "byte",
    "system", "matrix", "vector", "tensor", "radius", "sector", "zone", "area", "base", "post",
    "alpha", "beta", "gamma", "delta", "omega", "sigma", "theta", "zeta", "prime", "nova",
    "super", "hyper", "ultra", "mega", "giga", "tera", "peta", "exa", "zetta", "yotta",
    "proton", "neutron", "electron", "photon", "boson", "gluon", "quark", "lepton", "muon", "tau",
    "gravity", "magnet", "plasma", "fusion", "fission", "energy", "power", "joule", "watt", "volt",
    "empire", "rebel", "alliance", "federation", "dominion", "colony", "station", "outpost", "sentry", "drone",
    "fighter", "bomber", "cruiser", "frigate", "corvette", "carrier", "dreadnought", "titan", "scout", "probe",
    "intercept", "destroy", "defend", "attack", "engage", "evade", "dodge", "strafe", "target", "lock",
    "shield", "armor", "health", "damage", "repair", "salvage", "scrap", "loot", "cargo", "freight",
    "mining", "drill", "refine", "smelt", "forge", "craft", "build", "deploy", "launch", "dock",
    "asteroid", "meteor", "meteorite", "bolide", "crater", "canyon", "valley", "mountain", "volcano", "lava",
    "ice", "snow", "frost", "water", "ocean", "sea", "lake", "river", "delta", "basin",
    "atmosphere", "stratosphere", "mesosphere", "thermosphere", "exosphere", "ozone", "climate", "weather", "storm", "wind",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_nonempty_lowercase_ascii() {
        assert!(!WORD_LIST.is_empty());
        for word in WORD_LIST {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "catalog word {word:?} is not lowercase ascii"
            );
        }
    }
}
