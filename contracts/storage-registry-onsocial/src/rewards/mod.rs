mod claim;
mod distribute;
