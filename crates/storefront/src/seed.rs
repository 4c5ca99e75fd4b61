//! Built-in default catalog.
//!
//! Used whenever persisted storage is absent, unreadable, or malformed. The
//! short numeric ids are the historical seed ids; newly created products get
//! random 128-bit ids instead.

use digivault_core::{Product, ProductId};
use rust_decimal::Decimal;

/// The default category list.
#[must_use]
pub fn categories() -> Vec<String> {
    ["Video", "Design", "Streaming", "Utility"]
        .map(str::to_owned)
        .to_vec()
}

/// The default product list, newest-first like the live catalog.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn products() -> Vec<Product> {
    vec![
        product(
            "1",
            "CapCut Pro (1 Year)",
            "Video",
            Decimal::new(1299, 2),
            "https://images.unsplash.com/photo-1611162617474-5b21e879e113?auto=format&fit=crop&q=80&w=800",
            true,
            "Unlock the full potential of your video editing with CapCut Pro. Get access to premium effects, cloud storage, and advanced AI features for a full year. Perfect for TikTok and Reels creators.",
            &[
                "1 Year Subscription",
                "No Watermark",
                "Premium Effects & Filters",
                "100GB Cloud Storage",
            ],
            Decimal::new(49, 1),
            342,
        ),
        product(
            "2",
            "Adobe Creative Cloud",
            "Design",
            Decimal::new(2499, 2),
            "https://images.unsplash.com/photo-1626785774573-4b799312c95d?auto=format&fit=crop&q=80&w=800",
            true,
            "Get full access to the entire Adobe Creative Cloud suite including Photoshop, Illustrator, Premiere Pro, and more. This is a private account with your own email.",
            &[
                "All Apps Included",
                "100GB Cloud Storage",
                "Private Account",
                "Supports Updates",
            ],
            Decimal::new(48, 1),
            890,
        ),
        product(
            "3",
            "Netflix Premium 4K",
            "Streaming",
            Decimal::new(499, 2),
            "https://images.unsplash.com/photo-1574375927938-d5a98e8ffe85?auto=format&fit=crop&q=80&w=800",
            true,
            "Enjoy movies and TV shows in stunning 4K UHD. This premium subscription profile supports 4 screens and offline downloads. Warranty included for the full duration.",
            &[
                "4K Ultra HD",
                "4 Screens Allowed",
                "No Ads",
                "Download Supported",
            ],
            Decimal::new(50, 1),
            1250,
        ),
        product(
            "4",
            "Canva Pro Lifetime",
            "Design",
            Decimal::new(899, 2),
            "https://images.unsplash.com/photo-1625530182604-e3f6d77c4491?auto=format&fit=crop&q=80&w=800",
            true,
            "Join a private Canva Pro team and get lifetime access to premium templates, fonts, and stock photos. One-time payment for unlimited creativity.",
            &[
                "Lifetime Access",
                "Magic Resize",
                "Background Remover",
                "Brand Kit Access",
            ],
            Decimal::new(49, 1),
            567,
        ),
        product(
            "5",
            "Spotify Premium",
            "Streaming",
            Decimal::new(299, 2),
            "https://images.unsplash.com/photo-1614680376593-902f74cf0d41?auto=format&fit=crop&q=80&w=800",
            true,
            "Upgrade your personal account to Spotify Premium Individual. Enjoy ad-free music, offline playback, and high-quality audio streaming. Works worldwide.",
            &[
                "Upgrade Your Own Account",
                "Ad-Free Listening",
                "Offline Mode",
                "High Quality Audio",
            ],
            Decimal::new(49, 1),
            420,
        ),
        product(
            "6",
            "ChatGPT Plus (Shared)",
            "Utility",
            Decimal::new(999, 2),
            "https://images.unsplash.com/photo-1677442136019-21780ecad995?auto=format&fit=crop&q=80&w=800",
            true,
            "Access the power of GPT-4 and DALL-E 3 with a shared ChatGPT Plus account. Ideal for students and developers needing advanced AI capabilities at a lower cost.",
            &[
                "GPT-4 Access",
                "DALL-E 3 Image Gen",
                "Faster Response Speed",
                "Priority Access",
            ],
            Decimal::new(47, 1),
            156,
        ),
        product(
            "7",
            "NordVPN 2-Year Plan",
            "Utility",
            Decimal::new(1499, 2),
            "https://images.unsplash.com/photo-1563986768609-322da13575f3?auto=format&fit=crop&q=80&w=800",
            true,
            "Secure your digital life with NordVPN. Account valid for 2 years with active warranty. Protects up to 6 devices simultaneously with military-grade encryption.",
            &[
                "2 Year Validity",
                "6 Devices",
                "Threat Protection",
                "No Logs Policy",
            ],
            Decimal::new(48, 1),
            310,
        ),
        product(
            "8",
            "YouTube Premium",
            "Streaming",
            Decimal::new(350, 2),
            "https://images.unsplash.com/photo-1611162616475-46b635cb6868?auto=format&fit=crop&q=80&w=800",
            false,
            "Watch YouTube without ads, play videos in the background, and download content for offline viewing. Includes access to YouTube Music Premium.",
            &[
                "Ad-Free Video",
                "Background Play",
                "YouTube Music Included",
                "Offline Downloads",
            ],
            Decimal::new(48, 1),
            215,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    category: &str,
    price: Decimal,
    image: &str,
    in_stock: bool,
    description: &str,
    features: &[&str],
    rating: Decimal,
    reviews: u32,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        category: category.to_owned(),
        price,
        image: image.to_owned(),
        in_stock,
        description: description.to_owned(),
        features: features.iter().map(|&f| f.to_owned()).collect(),
        rating,
        reviews,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let products = products();
        for (i, a) in products.iter().enumerate() {
            for b in products.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_seed_categories_cover_products() {
        let categories = categories();
        for product in products() {
            assert!(categories.contains(&product.category), "{}", product.name);
        }
    }

    #[test]
    fn test_seed_has_an_out_of_stock_product() {
        assert!(products().iter().any(|p| !p.in_stock));
    }
}
