pub mod link_list;
pub mod page_header;
pub mod view_switch;

pub use link_list::{LinkItem, LinkList};
pub use page_header::PageHeader;
pub use view_switch::{switch_target, TabId, ViewSwitch};
