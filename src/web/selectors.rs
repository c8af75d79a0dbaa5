// SPDX-License-Identifier: MPL-2.0
//! Element ids, selectors and attributes the markup provides.

pub const MOBILE_TOGGLE_ID: &str = "mobileToggle";
pub const MAIN_NAV_ID: &str = "mainNav";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";

pub const SCROLL_TOP_ID: &str = "scrollToTop";
pub const HEADER_SELECTOR: &str = ".premium-header";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const SCROLL_INDICATOR_ID: &str = "scrollIndicator";

pub const REVEAL_SELECTOR: &str = ".reveal-fade, .reveal-slide";
pub const COUNTER_SELECTOR: &str = ".stat-number";
pub const COUNTER_TARGET_ATTRIBUTE: &str = "data-target";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

pub const SLIDER_ID: &str = "testimonialsSlider";
pub const SLIDE_SELECTOR: &str = ".testimonial-slide";
pub const PREV_BUTTON_ID: &str = "prevBtn";
pub const NEXT_BUTTON_ID: &str = "nextBtn";
pub const DOTS_CONTAINER_ID: &str = "sliderDots";
pub const DOT_CLASS: &str = "dot";

pub const CONTACT_FORM_SELECTOR: &str = ".contact-form";
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
pub const ERROR_MESSAGE_STYLE: &str = "display:block;color:#FF8DA1;font-size:0.9rem;margin-top:5px;";

pub const NOTIFICATION_CLASS: &str = "success-notification";
pub const NOTIFICATION_STYLE: &str = "position:fixed;top:100px;right:20px;\
background:linear-gradient(135deg,#FF8DA1,#FF9CE9);color:white;padding:20px 30px;\
border-radius:12px;box-shadow:0 10px 30px rgba(173,86,196,0.3);z-index:10000;max-width:400px;";

/// Optional `<script type="application/toml">` block overriding the defaults.
pub const CONFIG_SCRIPT_ID: &str = "siteInteractionsConfig";
