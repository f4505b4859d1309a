pub mod adhd_self_report;
