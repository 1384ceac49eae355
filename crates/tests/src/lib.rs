#[cfg(test)]
mod common;

#[cfg(test)]
mod company_list_tests;

#[cfg(test)]
mod company_create_tests;

#[cfg(test)]
mod employee_list_tests;

#[cfg(test)]
mod employee_create_tests;

#[cfg(test)]
mod statistics_tests;

#[cfg(test)]
mod report_tests;

#[cfg(test)]
mod session_tests;
