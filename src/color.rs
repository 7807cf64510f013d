use anyhow::anyhow;
use anyhow::bail;

/// Largest value that still fits into 0x00RRGGBB.
pub const MAX_PACKED: u32 = 0xffffff;

/// Parse a packed color given as `#RRGGBB`, `0xRRGGBB` or a plain decimal
/// number.
pub fn parse_packed(input: &str) -> anyhow::Result<u32> {
    let input = input.trim();
    let hex = input
        .strip_prefix('#')
        .or_else(|| input.strip_prefix("0x"))
        .or_else(|| input.strip_prefix("0X"));
    let value = match hex {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => input.parse::<u32>(),
    }
    .map_err(|e| anyhow!("invalid color '{}': {}", input, e))?;
    if value > MAX_PACKED {
        bail!("color '{}' does not fit into 24 bits", input);
    }
    return Ok(value);
}

/// Parse a comma separated list of exactly eight colors.
pub fn parse_zone_list(input: &str) -> anyhow::Result<[u32; 8]> {
    let colors = input
        .split(',')
        .map(parse_packed)
        .collect::<anyhow::Result<Vec<u32>>>()?;
    return colors
        .try_into()
        .map_err(|v: Vec<u32>| anyhow!("expected 8 colors, got {}", v.len()));
}

/// Format as `#rrggbb`.
pub fn format_packed(rgb: u32) -> String {
    format!("#{:06x}", rgb & MAX_PACKED)
}

/// JSON body reporting a cache snapshot both as integers and as hex text.
pub fn status_json(cache: &[u32; 8]) -> serde_json::Value {
    let hex: Vec<String> = cache.iter().map(|c| format_packed(*c)).collect();
    serde_json::json!({ "cache": cache, "hex": hex })
}
