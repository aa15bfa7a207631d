pub mod preferences;
pub mod roas_list;
pub mod trust_anchors;

pub use preferences::Preferences;
pub use roas_list::RoasList;
pub use trust_anchors::TrustAnchors;

pub enum Screen {
    Roas(RoasList),
    TrustAnchors(TrustAnchors),
    Preferences(Preferences),
}
