// SPDX-License-Identifier: Apache-2.0

pub(crate) mod cors;
pub(crate) mod handlers;
pub(crate) mod response_contract;
