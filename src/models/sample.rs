//! Built-in sample document offered by the "load sample" action

pub const SAMPLE_SVG: &str = r##"<svg width="240" height="240" viewBox="0 0 120 120" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="g" x1="0%" x2="100%" y1="0%" y2="100%">
      <stop offset="0%" stop-color="#3b82f6" />
      <stop offset="100%" stop-color="#22d3ee" />
    </linearGradient>
  </defs>
  <rect x="8" y="8" width="104" height="104" rx="18" fill="url(#g)" />
  <circle cx="60" cy="60" r="34" fill="white" opacity="0.9" />
  <path d="M60 32 L78 76 H42 Z" fill="#0f172a" opacity="0.8" />
</svg>"##;

/// Tag names of the sample root's child elements, in document order
pub const SAMPLE_CHILD_TAGS: [&str; 4] = ["defs", "rect", "circle", "path"];
