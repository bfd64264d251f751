use crate::types::DesignerProfile;

fn profile(
    name: &str,
    bio: &str,
    profile_image: &str,
    styles: &[&str],
    weights: &[(&str, f64)],
) -> DesignerProfile {
    DesignerProfile {
        name: name.to_string(),
        bio: bio.to_string(),
        profile_image: profile_image.to_string(),
        styles: styles.iter().map(|s| s.to_string()).collect(),
        weights: weights.iter().copied().collect(),
    }
}

/// Built-in designers seeded into an empty catalog
pub fn sample_designers() -> Vec<DesignerProfile> {
    vec![
        profile(
            "Emma Richardson",
            "Sustainable fashion designer with 8 years of experience creating eco-friendly clothing lines. Specializes in upcycled materials and zero-waste patterns.",
            "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=400&h=400&fit=crop&crop=face",
            &["Sustainable", "Bohemian", "Minimalist"],
            &[("sustainable", 0.9), ("bohemian", 0.6), ("minimalist", 0.7)],
        ),
        profile(
            "Marcus Chen",
            "Avant-garde designer pushing boundaries with futuristic silhouettes and innovative textiles. Known for bold statements and architectural designs.",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=face",
            &["Avant-garde", "Futuristic", "Architectural"],
            &[("avant-garde", 0.9), ("futuristic", 0.8), ("architectural", 0.7)],
        ),
        profile(
            "Sophie Laurent",
            "Parisian-inspired designer creating romantic, feminine pieces with delicate details and vintage influences.",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop&crop=face",
            &["Romantic", "Vintage", "Feminine", "Pastel"],
            &[("romantic", 0.8), ("vintage", 0.7), ("feminine", 0.8), ("pastel", 0.6)],
        ),
        profile(
            "David Park",
            "Streetwear specialist blending urban aesthetics with high fashion elements. Focus on comfort, functionality, and cultural relevance.",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face",
            &["Streetwear", "Urban", "Contemporary"],
            &[("streetwear", 0.9), ("urban", 0.8), ("contemporary", 0.6)],
        ),
        profile(
            "Isabella Rossi",
            "Luxury evening wear designer creating exquisite gowns and formal attire with Italian craftsmanship and attention to detail.",
            "https://images.unsplash.com/photo-1544725176-7c40e5a71c5e?w=400&h=400&fit=crop&crop=face",
            &["Luxury", "Evening Wear", "Formal", "Elegant"],
            &[("luxury", 0.9), ("formal", 0.8), ("elegant", 0.7)],
        ),
        profile(
            "Alex Thompson",
            "Minimalist designer focused on clean lines, neutral palettes, and timeless pieces that transcend seasonal trends.",
            "https://images.unsplash.com/photo-1519345182560-3f2917c472ef?w=400&h=400&fit=crop&crop=face",
            &["Minimalist", "Sustainable", "Neutral", "Timeless"],
            &[("minimalist", 0.8), ("sustainable", 0.7), ("neutral", 0.6), ("timeless", 0.5)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_six_unique_designers() {
        let designers = sample_designers();
        assert_eq!(designers.len(), 6);
        let names: HashSet<_> = designers.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_every_profile_has_weights() {
        for designer in sample_designers() {
            assert!(!designer.weights.is_empty(), "{}", designer.name);
            assert!(!designer.styles.is_empty(), "{}", designer.name);
        }
    }
}
