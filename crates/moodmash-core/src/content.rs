//! Themed content pools.
//!
//! One curated pool per vibe category plus a default pool. Absurdist has
//! no curated entry and resolves to the default, which keeps the gap
//! fallback a live path. Every array here must stay non-empty: the
//! selector indexes them with a modulus and never checks.

use crate::types::VibeType;

/// Candidate content for one vibe category.
#[derive(Debug)]
pub struct ContentPool {
    pub quotes: &'static [&'static str],
    pub music: &'static [&'static str],
    pub emoji_sets: &'static [[&'static str; 5]],
    pub backgrounds: &'static [&'static str],
    /// Base colors perturbed into the final palette, one per slot.
    pub base_palette: [&'static str; 3],
}

/// Served when a category has no curated pool.
pub static DEFAULT_POOL: ContentPool = ContentPool {
    quotes: &[
        "Not a mood, a lifestyle",
        "Just out here collecting vibes like Pokémon",
        "Slightly unhinged, but in a cute way",
        "Exists in the space between cringe and iconic",
    ],
    music: &[
        "Songs that make you feel like the main character",
        "That one song that was playing during your core memory",
        "Bedroom pop with cryptic sampling",
    ],
    emoji_sets: &[
        ["✨", "🌈", "🔮", "💫", "🌙"],
        ["🎭", "🎪", "🎟️", "🎨", "🎬"],
    ],
    backgrounds: &[
        "Gradient waves rippling between pastel colors with subtle glitter effects",
        "Minimalist zen patterns with subtle movement and texture",
    ],
    base_palette: ["#f72585", "#7209b7", "#4cc9f0"],
};

static CHAOTIC: ContentPool = ContentPool {
    quotes: &[
        "Embracing the chaos one glitter bomb at a time",
        "Powered by chaos and caffeine",
        "More issues than Vogue but twice as entertaining",
        "Embracing my main character energy through continuous plot twists",
    ],
    music: &[
        "Hyperpop playlist that will blow your speakers",
        "Glitchcore to question your reality",
        "Phonk remixes of classical music",
    ],
    emoji_sets: &[
        ["🌩️", "🎢", "🧪", "🌀", "🔥"],
        ["🔥", "💯", "🤪", "💅", "🎭"],
    ],
    backgrounds: &[
        "Strobing color blocks with torn-paper edges and scribbled ink",
        "Glitched digital landscape with corrupted pixels and data mosaics",
    ],
    base_palette: ["#ff3b3b", "#ffb03b", "#7a00cc"],
};

static CHILL: ContentPool = ContentPool {
    quotes: &[
        "Living life on airplane mode",
        "Just vibing at a frequency only dogs can hear",
        "Vibing so hard the universe can't handle it",
        "Living in a perpetual state of 'I'll deal with it tomorrow'",
    ],
    music: &[
        "Lo-fi beats to chill/study to",
        "Dreamy bedroom pop for stargazing",
        "Shoegaze with ambient nature sounds",
    ],
    emoji_sets: &[
        ["🌊", "🧿", "🌙", "✌️", "🫧"],
        ["🌊", "🧿", "🦋", "🌸", "🕊️"],
    ],
    backgrounds: &[
        "Gradient waves rippling between pastel colors with subtle glitter effects",
        "Soft fog banks drifting over a still lake at dawn",
    ],
    base_palette: ["#7ec8e3", "#b8e0d2", "#d6eadf"],
};

static RETRO: ContentPool = ContentPool {
    quotes: &[
        "Living life through a nostalgic filter that doesn't exist",
        "My personality is 80% song lyrics and 20% movie quotes",
        "Collecting moments like they're going out of style",
    ],
    music: &[
        "80s synthwave driving at midnight",
        "Y2K pop played through a broken cassette player",
        "Ambient sounds of a shopping mall in 1992",
        "Nostalgic hits from your childhood",
    ],
    emoji_sets: &[
        ["⏳", "📻", "🕯️", "📜", "🪞"],
        ["🌈", "🦄", "🌟", "🍭", "⚡"],
    ],
    backgrounds: &[
        "Retro VHS static with glitching patterns and analog distortion",
        "Y2K inspired patterns with bubble shapes and metallic textures",
    ],
    base_palette: ["#e8a33d", "#c95d2c", "#7a9e7e"],
};

static CYBERPUNK: ContentPool = ContentPool {
    quotes: &[
        "Jacked in, checked out, still buffering",
        "Running on firmware the manufacturer stopped supporting",
        "My aura is held together with duct tape and neon",
    ],
    music: &[
        "Darksynth for racing through rain-slick streets",
        "Industrial techno from a basement server room",
        "Glitchcore to question your reality",
    ],
    emoji_sets: &[
        ["💾", "👾", "🤖", "🦾", "📡"],
        ["📱", "⚡", "🔋", "🛰️", "🌃"],
    ],
    backgrounds: &[
        "Cyberpunk cityscape with neon grid lines and digital rain",
        "Holographic billboards flickering over chrome alleyways",
    ],
    base_palette: ["#0ff0fc", "#ff2a6d", "#05d9e8"],
};

static VAPORWAVE: ContentPool = ContentPool {
    quotes: &[
        "Permanently on hold with the aesthetic department",
        "Spiritually aligned with my chaotic Spotify playlists",
        "Sorry I can't hear you over my own fabulousness",
    ],
    music: &[
        "Vaporwave remixes of classical music",
        "Slowed & reverb remixes of early 2000s pop hits",
        "Lo-fi hip hop but it's recorded in an abandoned mall",
    ],
    emoji_sets: &[
        ["🌴", "🗿", "💽", "🌅", "📼"],
        ["🛼", "🍹", "🐬", "🌺", "💜"],
    ],
    backgrounds: &[
        "Vaporwave grid landscape with sunset colors and floating geometric shapes",
        "Marble statues against a checkerboard floor and magenta sky",
    ],
    base_palette: ["#ff71ce", "#01cdfe", "#b967ff"],
};

static COTTAGECORE: ContentPool = ContentPool {
    quotes: &[
        "Trying to be the person my dog thinks I am",
        "Homegrown and slightly feral about it",
        "Collecting moments like they're going out of style",
    ],
    music: &[
        "Cottagecore folk with a hint of witchcraft",
        "Fiddle tunes for kneading bread aggressively",
        "Shoegaze with ambient nature sounds",
    ],
    emoji_sets: &[
        ["🌷", "🦋", "🍄", "🌿", "🧁"],
        ["🌿", "🍄", "🌻", "🐝", "🍯"],
    ],
    backgrounds: &[
        "Soft cottagecore watercolor landscape with delicate floral patterns",
        "Pressed wildflowers scattered across handmade paper",
    ],
    base_palette: ["#a8c686", "#e7d8c9", "#d77a61"],
};

static HYPER_DIGITAL: ContentPool = ContentPool {
    quotes: &[
        "Too many tabs open in my brain browser",
        "My personality is just recycled memes and coffee",
        "Professional overthinker with a side of existential dread",
    ],
    music: &[
        "Hyperpop with existential lyrics",
        "Video game soundtracks but it's the underwater levels",
        "Breakcore for answering emails at 3am",
    ],
    emoji_sets: &[
        ["📱", "💫", "🧩", "🎮", "💡"],
        ["🖥️", "🧠", "⌨️", "🔌", "📶"],
    ],
    backgrounds: &[
        "Glitched digital landscape with corrupted pixels and data mosaics",
        "Cascading terminal text dissolving into pixel noise",
    ],
    base_palette: ["#00f5d4", "#f15bb5", "#9b5de5"],
};

static COSMIC: ContentPool = ContentPool {
    quotes: &[
        "Manifesting while simultaneously doubting everything",
        "Just a speck of stardust with opinions",
        "Aligned with the stars, at odds with my alarm clock",
    ],
    music: &[
        "Ambient drones recorded from radio telescope static",
        "That one song that was playing during your core memory",
        "Spacey synth arpeggios for leaving the atmosphere",
    ],
    emoji_sets: &[
        ["👽", "🛸", "💫", "🌌", "🔭"],
        ["✨", "🪐", "🔮", "🧠", "💭"],
    ],
    backgrounds: &[
        "Cosmic nebula swirls with stardust and celestial bodies",
        "Deep-field starscape with slow-drifting constellations",
    ],
    base_palette: ["#2e1a47", "#7b2cbf", "#c77dff"],
};

static GOTH: ContentPool = ContentPool {
    quotes: &[
        "Professional overthinker with a side of existential dread",
        "Sunlight is a suggestion I decline",
        "My love language is comfortable silence in dark rooms",
    ],
    music: &[
        "Dark academia playlist but with trap beats",
        "Post-punk echoing through an empty cathedral",
        "Organ covers of songs that were already sad",
    ],
    emoji_sets: &[
        ["🖤", "🥀", "🦇", "🕸️", "🔪"],
        ["🖤", "🥀", "🩸", "🗡️", "🕸️"],
    ],
    backgrounds: &[
        "Dark academia textures with vintage paper and subtle ink blotches",
        "Wrought-iron lattice shadows over worn velvet",
    ],
    base_palette: ["#1b1b1e", "#5c0a27", "#8d8d92"],
};

static DREAMCORE: ContentPool = ContentPool {
    quotes: &[
        "Existing somewhere between 'got my life together' and 'total mess'",
        "Living in a perpetual state of 'I'll deal with it tomorrow'",
        "My memories have a soft filter I never applied",
    ],
    music: &[
        "Songs that make you feel like you're in a coming-of-age film",
        "Music that sounds like how Wes Anderson films look",
        "Slowed nursery melodies from another room",
    ],
    emoji_sets: &[
        ["🛏️", "🚪", "📺", "🌫️", "🎠"],
        ["🎭", "🎪", "🎟️", "🎨", "🎬"],
    ],
    backgrounds: &[
        "Dreamcore surrealist landscape with impossible architecture",
        "Endless hallway of pastel doors lit by a flickering fluorescent hum",
    ],
    base_palette: ["#9fa8da", "#f8bbd0", "#b2dfdb"],
};

static ETHEREAL: ContentPool = ContentPool {
    quotes: &[
        "Barely tethered to this plane and loving it",
        "Made of light, rumors, and good intentions",
        "Manifesting while simultaneously doubting everything",
    ],
    music: &[
        "Dreamy bedroom pop for stargazing",
        "Choral harmonies dissolving into reverb",
        "Shoegaze with ambient nature sounds",
    ],
    emoji_sets: &[
        ["🧵", "🪄", "🎐", "🌊", "🕊️"],
        ["✨", "🔮", "🌙", "💫", "🪐"],
    ],
    backgrounds: &[
        "Ethereal clouds with prismatic light refractions and soft bokeh",
        "Translucent veils of aurora light over glass-still water",
    ],
    base_palette: ["#e0c3fc", "#8ec5fc", "#f5f7fa"],
};

/// Curated pool for `vibe`, if one exists.
pub fn pool_for(vibe: VibeType) -> Option<&'static ContentPool> {
    match vibe {
        VibeType::Chaotic => Some(&CHAOTIC),
        VibeType::Chill => Some(&CHILL),
        VibeType::Retro => Some(&RETRO),
        VibeType::Cyberpunk => Some(&CYBERPUNK),
        VibeType::Vaporwave => Some(&VAPORWAVE),
        VibeType::Cottagecore => Some(&COTTAGECORE),
        VibeType::HyperDigital => Some(&HYPER_DIGITAL),
        VibeType::Cosmic => Some(&COSMIC),
        VibeType::Goth => Some(&GOTH),
        VibeType::Dreamcore => Some(&DREAMCORE),
        VibeType::Ethereal => Some(&ETHEREAL),
        VibeType::Absurdist => None,
    }
}

/// Pool used by assembly: curated if present, default otherwise.
pub fn pool_or_default(vibe: VibeType) -> &'static ContentPool {
    pool_for(vibe).unwrap_or(&DEFAULT_POOL)
}

#[cfg(test)]
mod tests {
    use crate::color::parse_hex_color;

    use super::*;

    #[test]
    fn every_reachable_pool_is_fully_stocked() {
        for vibe in VibeType::ALL {
            let pool = pool_or_default(vibe);
            assert!(!pool.quotes.is_empty(), "{vibe}: quotes");
            assert!(!pool.music.is_empty(), "{vibe}: music");
            assert!(!pool.emoji_sets.is_empty(), "{vibe}: emoji sets");
            assert!(!pool.backgrounds.is_empty(), "{vibe}: backgrounds");
        }
    }

    #[test]
    fn base_palettes_are_valid_hex() {
        for vibe in VibeType::ALL {
            for base in pool_or_default(vibe).base_palette {
                assert!(parse_hex_color(base).is_some(), "{vibe}: {base}");
            }
        }
    }

    #[test]
    fn absurdist_falls_back_to_default() {
        assert!(pool_for(VibeType::Absurdist).is_none());
        assert!(std::ptr::eq(
            pool_or_default(VibeType::Absurdist),
            &DEFAULT_POOL
        ));
    }
}
