pub(crate) const PAGE_CONFIG_GLOBAL: &str = "__FUSE_PAGE_CONFIG__";
pub(crate) const DOM_READY_EVENT: &str = "DOMContentLoaded";
pub(crate) const CLICK_EVENT: &str = "click";
pub(crate) const CHANGE_EVENT: &str = "change";
pub(crate) const SUBMIT_EVENT: &str = "submit";
