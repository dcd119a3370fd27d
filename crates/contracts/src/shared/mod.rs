pub mod dom_contract;
