//! Static site configuration.
//!
//! The showcase media is served from external CDNs so the bundle stays a
//! plain static deploy. Swap these URLs to rebrand the landing page.

/// Source of the product showcase video (muted, loopable mp4).
pub fn get_showcase_video_url() -> &'static str {
    "https://player.vimeo.com/external/459389137.sd.mp4?s=956afb3c3f35fa5f4ee0b340c3f1a334be374ff4&profile_id=164&oauth2_token_id=57447761"
}

/// Poster frame shown before the showcase video has loaded any data.
pub fn get_showcase_poster_url() -> &'static str {
    "https://images.unsplash.com/photo-1531297484001-80022131f5a1?auto=format&fit=crop&q=80"
}

/// Address the "Talk to sales" call to action points at.
pub fn get_sales_email() -> &'static str {
    "sales@boltsaas.com"
}
